//! Route 53 request documents

use serde::Serialize;

use super::XML_NAMESPACE;
use super::record_set::ResourceRecordSetXml;

// ============ CreateHostedZone ============

/// `POST hostedzone` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "CreateHostedZoneRequest")]
pub struct CreateHostedZoneRequest {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CallerReference")]
    pub caller_reference: String,
    #[serde(
        rename = "HostedZoneConfig",
        skip_serializing_if = "Option::is_none"
    )]
    pub hosted_zone_config: Option<HostedZoneConfigRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostedZoneConfigRequest {
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl CreateHostedZoneRequest {
    /// An absent or empty comment omits `HostedZoneConfig` entirely.
    pub fn new(
        name: impl Into<String>,
        caller_reference: impl Into<String>,
        comment: Option<&str>,
    ) -> Self {
        Self {
            xmlns: XML_NAMESPACE,
            name: name.into(),
            caller_reference: caller_reference.into(),
            hosted_zone_config: comment
                .filter(|c| !c.is_empty())
                .map(|c| HostedZoneConfigRequest {
                    comment: c.to_string(),
                }),
        }
    }
}

// ============ ChangeResourceRecordSets ============

/// `POST hostedzone/{id}/rrset` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "ChangeResourceRecordSetsRequest")]
pub struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    pub change_batch: ChangeBatchXml,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeBatchXml {
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "Changes")]
    pub changes: ChangesXml,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangesXml {
    #[serde(rename = "Change")]
    pub items: Vec<ChangeXml>,
}

/// One `<Change>`: `CREATE` or `DELETE` plus the full record set.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeXml {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "ResourceRecordSet")]
    pub resource_record_set: ResourceRecordSetXml,
}

impl ChangeResourceRecordSetsRequest {
    /// Changes are written in the order given.
    pub fn new(changes: Vec<ChangeXml>, comment: Option<&str>) -> Self {
        Self {
            xmlns: XML_NAMESPACE,
            change_batch: ChangeBatchXml {
                comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
                changes: ChangesXml { items: changes },
            },
        }
    }
}
