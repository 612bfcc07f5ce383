//! Route 53 XML wire codec
//!
//! Plain serde structures mirroring the `2013-04-01` schema. Element names
//! are fixed by `#[serde(rename)]`; mapping to typed records happens in the
//! consumer.

mod record_set;
mod request;
mod response;

pub use record_set::{AliasTargetXml, ResourceRecordSetXml, ResourceRecordXml, ResourceRecordsXml};
pub use request::{
    ChangeBatchXml, ChangeResourceRecordSetsRequest, ChangeXml, ChangesXml,
    CreateHostedZoneRequest, HostedZoneConfigRequest,
};
pub(crate) use response::ErrorResponseXml;
pub use response::{
    ChangeInfoXml, ChangeResourceRecordSetsResponse, CreateHostedZoneResponse, DelegationSetXml,
    DeleteHostedZoneResponse, ErrorDetailXml, GetChangeResponse, GetHostedZoneResponse,
    HostedZoneConfigXml, HostedZoneXml, HostedZonesXml, ListHostedZonesResponse,
    ListResourceRecordSetsResponse, NameServersXml, ResourceRecordSetsXml,
};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// REST API version, also the first path segment of every request.
pub const API_VERSION: &str = "2013-04-01";

/// Namespace carried by every request and response document.
pub const XML_NAMESPACE: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Parses a response document.
pub fn from_xml<T: DeserializeOwned>(body: &str) -> Result<T> {
    quick_xml::de::from_str(body).map_err(|e| {
        log::error!("[route53] XML parse error: {e}");
        log::error!("[route53] Raw response: {}", truncate_for_log(body));
        ProviderError::ParseError {
            detail: e.to_string(),
        }
    })
}

/// Serializes a request document, prefixed with the XML declaration.
pub fn to_xml<T: Serialize>(value: &T) -> Result<String> {
    let body = quick_xml::se::to_string(value).map_err(|e| ProviderError::SerializationError {
        detail: e.to_string(),
    })?;
    Ok(format!("{XML_DECLARATION}\n{body}"))
}
