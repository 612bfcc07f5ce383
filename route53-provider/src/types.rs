//! Provider-level request and credential types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ Request Types ============

/// HTTP verbs used by the Route 53 REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read operations and listings.
    Get,
    /// Creations and change batches.
    Post,
    /// Hosted zone deletion.
    Delete,
}

impl HttpMethod {
    /// The verb as it appears on the request line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What accompanies a request: query parameters, an XML body, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    /// Query-string parameters, sent in the given order.
    Query(Vec<(String, String)>),
    /// A serialized XML request document.
    Body(String),
    /// No parameters and no body.
    Empty,
}

impl RequestPayload {
    /// Returns the query pairs, or an empty slice for bodies.
    pub fn query_pairs(&self) -> &[(String, String)] {
        match self {
            Self::Query(pairs) => pairs,
            Self::Body(_) | Self::Empty => &[],
        }
    }

    /// Returns the request body, or `""` when there is none.
    pub fn body(&self) -> &str {
        match self {
            Self::Body(body) => body,
            Self::Query(_) | Self::Empty => "",
        }
    }
}

// ============ Transport Configuration ============

/// Connection settings for [`Route53Transport`](crate::Route53Transport).
///
/// # Default
///
/// `https://route53.amazonaws.com`, signing region `us-east-1`, two retries,
/// 10 s connect timeout and 30 s request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportConfig {
    /// Scheme and host of the API endpoint, without the version path.
    pub endpoint: String,
    /// Region used in the `SigV4` credential scope. Route 53 is global and signs as `us-east-1`.
    pub region: String,
    /// Maximum number of automatic retries for transient errors.
    pub max_retries: u32,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://route53.amazonaws.com".to_string(),
            region: "us-east-1".to_string(),
            max_retries: 2,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl TransportConfig {
    /// Host name of [`endpoint`](Self::endpoint), used for the signed `host` header.
    pub fn host(&self) -> &str {
        self.endpoint
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }
}

// ============ Credential Types ============

/// Validation error for provider credentials.
///
/// Returned when credential fields are missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// AWS access key pair used to sign every request.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route53Credentials {
    /// AWS Access Key ID.
    pub access_key_id: String,
    /// AWS Secret Access Key.
    pub secret_access_key: String,
}

impl std::fmt::Debug for Route53Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route53Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .finish()
    }
}

impl Route53Credentials {
    /// Environment variable holding the access key id.
    pub const ACCESS_KEY_ID_VAR: &'static str = "AWS_ACCESS_KEY_ID";
    /// Environment variable holding the secret access key.
    pub const SECRET_ACCESS_KEY_VAR: &'static str = "AWS_SECRET_ACCESS_KEY";

    /// Creates credentials from an access key pair.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// Construct credentials from a `HashMap` (`accessKeyId`, `secretAccessKey`),
    /// validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or empty.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        Ok(Self {
            access_key_id: Self::get_required_field(map, "accessKeyId", "Access Key ID")?,
            secret_access_key: Self::get_required_field(
                map,
                "secretAccessKey",
                "Secret Access Key",
            )?,
        })
    }

    /// Reads `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` from the process environment.
    pub fn from_env() -> Result<Self, CredentialValidationError> {
        let map: HashMap<String, String> = [
            ("accessKeyId", Self::ACCESS_KEY_ID_VAR),
            ("secretAccessKey", Self::SECRET_ACCESS_KEY_VAR),
        ]
        .into_iter()
        .filter_map(|(key, var)| std::env::var(var).ok().map(|v| (key.to_string(), v)))
        .collect();
        Self::from_map(&map)
    }

    /// Convert back to the flat key/value form accepted by [`from_map`](Self::from_map).
    pub fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            ("accessKeyId".to_string(), self.access_key_id.clone()),
            ("secretAccessKey".to_string(), self.secret_access_key.clone()),
        ])
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(value) if value.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(value) => Ok(value.trim().to_string()),
        }
    }
}
