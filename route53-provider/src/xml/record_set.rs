//! Resource record set XML shapes

use serde::{Deserialize, Serialize};

/// `<ResourceRecordSet>`, shared by listings and change batches.
///
/// Field order is the schema order; serialization depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceRecordSetXml {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(
        rename = "SetIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub set_identifier: Option<String>,
    #[serde(rename = "Weight", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u8>,
    #[serde(rename = "Region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(
        rename = "ResourceRecords",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_records: Option<ResourceRecordsXml>,
    #[serde(rename = "AliasTarget", default, skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTargetXml>,
}

impl ResourceRecordSetXml {
    /// Record values in document order; empty for alias sets.
    pub fn values(&self) -> Vec<String> {
        self.resource_records
            .as_ref()
            .map(|r| r.records.iter().map(|v| v.value.clone()).collect())
            .unwrap_or_default()
    }
}

/// `<ResourceRecords>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceRecordsXml {
    #[serde(rename = "ResourceRecord", default)]
    pub records: Vec<ResourceRecordXml>,
}

impl ResourceRecordsXml {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: values
                .into_iter()
                .map(|v| ResourceRecordXml { value: v.into() })
                .collect(),
        }
    }
}

/// `<ResourceRecord><Value>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceRecordXml {
    #[serde(rename = "Value")]
    pub value: String,
}

/// `<AliasTarget>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AliasTargetXml {
    #[serde(rename = "HostedZoneId")]
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    #[serde(rename = "EvaluateTargetHealth", default)]
    pub evaluate_target_health: bool,
}
