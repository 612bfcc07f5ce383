//! Route 53 response documents

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::record_set::ResourceRecordSetXml;

// ============ Hosted zones ============

/// `<HostedZone>`, as it appears in listings, fetches and creations.
#[derive(Debug, Clone, Deserialize)]
pub struct HostedZoneXml {
    /// `/hostedzone/<id>`
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CallerReference")]
    pub caller_reference: String,
    #[serde(rename = "Config")]
    pub config: Option<HostedZoneConfigXml>,
    #[serde(rename = "ResourceRecordSetCount")]
    pub resource_record_set_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostedZoneConfigXml {
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
    #[serde(rename = "PrivateZone")]
    pub private_zone: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostedZonesXml {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<HostedZoneXml>,
}

/// `<DelegationSet>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DelegationSetXml {
    #[serde(rename = "NameServers", default)]
    pub name_servers: NameServersXml,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameServersXml {
    #[serde(rename = "NameServer", default)]
    pub items: Vec<String>,
}

/// `GET hostedzone`
#[derive(Debug, Clone, Deserialize)]
pub struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZonesXml,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
    /// Present only when `IsTruncated` is true.
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
    #[serde(rename = "MaxItems")]
    pub max_items: Option<String>,
}

/// `GET hostedzone/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct GetHostedZoneResponse {
    #[serde(rename = "HostedZone")]
    pub hosted_zone: HostedZoneXml,
    #[serde(rename = "DelegationSet")]
    pub delegation_set: Option<DelegationSetXml>,
}

/// `POST hostedzone`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHostedZoneResponse {
    #[serde(rename = "HostedZone")]
    pub hosted_zone: HostedZoneXml,
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
    #[serde(rename = "DelegationSet")]
    pub delegation_set: Option<DelegationSetXml>,
}

/// `DELETE hostedzone/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteHostedZoneResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
}

// ============ Changes ============

/// `<ChangeInfo>`
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeInfoXml {
    /// `/change/<id>`
    #[serde(rename = "Id")]
    pub id: String,
    /// `PENDING` or `INSYNC`
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(
        rename = "SubmittedAt",
        deserialize_with = "crate::utils::datetime::deserialize"
    )]
    pub submitted_at: DateTime<Utc>,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

/// `POST hostedzone/{id}/rrset`
///
/// `change_info` is optional here so a malformed success body can be
/// reported as a provider failure instead of a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeResourceRecordSetsResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: Option<ChangeInfoXml>,
    #[serde(rename = "Error")]
    pub error: Option<ErrorDetailXml>,
}

/// `GET change/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct GetChangeResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
}

// ============ Record sets ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceRecordSetsXml {
    #[serde(rename = "ResourceRecordSet", default)]
    pub items: Vec<ResourceRecordSetXml>,
}

/// `GET hostedzone/{id}/rrset`
#[derive(Debug, Clone, Deserialize)]
pub struct ListResourceRecordSetsResponse {
    #[serde(rename = "ResourceRecordSets", default)]
    pub resource_record_sets: ResourceRecordSetsXml,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextRecordName")]
    pub next_record_name: Option<String>,
    #[serde(rename = "NextRecordType")]
    pub next_record_type: Option<String>,
    /// Only for weighted/latency sets sharing a name and type.
    #[serde(rename = "NextRecordIdentifier")]
    pub next_record_identifier: Option<String>,
    #[serde(rename = "MaxItems")]
    pub max_items: Option<String>,
}

// ============ Errors ============

/// `<Error>` inside an `ErrorResponse`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetailXml {
    #[serde(rename = "Type")]
    pub error_type: Option<String>,
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MessagesXml {
    #[serde(rename = "Message", default)]
    pub items: Vec<String>,
}

/// Either `<ErrorResponse><Error>..` or `<InvalidChangeBatch><Messages>..`;
/// the root element name is not significant to the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorResponseXml {
    #[serde(rename = "Error")]
    pub error: Option<ErrorDetailXml>,
    #[serde(rename = "Messages")]
    pub messages: Option<MessagesXml>,
}
