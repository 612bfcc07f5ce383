//! Provider error type

use serde::{Deserialize, Serialize};

/// Unified error type for everything that crosses the wire.
///
/// Produced by the transport (connection failures, timeouts, HTTP-level
/// failures) and by the error mapper when Route 53 answers with an error
/// document. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues, HTTP 502-504
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): throttled by the API
///
/// The built-in transport retries these with exponential backoff. Nothing
/// above the transport retries anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API throttled the request (HTTP 429, `Throttling`, `PriorRequestNotComplete`).
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The access key is unknown or the request signature does not match.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are valid but not allowed to perform the operation.
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone does not exist.
    ZoneNotFound {
        /// Hosted zone id, when known from the request.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A hosted zone with the same caller reference or name already exists.
    ZoneExists {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone still contains record sets other than the default SOA/NS pair.
    ZoneNotEmpty {
        /// Hosted zone id, when known from the request.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The change batch was rejected as a whole. Nothing in it was applied.
    InvalidChangeBatch {
        /// One message per rejected change, in the order the API reported them.
        messages: Vec<String>,
    },

    /// A request parameter is invalid.
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API returned a record type this client does not model.
    UnsupportedRecordType {
        /// The unsupported record type string.
        record_type: String,
    },

    /// An account limit (hosted zones, record sets, ...) has been reached.
    QuotaExceeded {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse a response document.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An error the mapper does not recognise.
    Unknown {
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this is an expected outcome (bad input, missing resource, ...),
    /// used to pick the log level: `warn` when `true`, `error` otherwise.
    ///
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::ZoneExists { .. }
                | Self::ZoneNotEmpty { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
                | Self::QuotaExceeded { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "[route53] Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "[route53] Request timeout: {detail}"),
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "[route53] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[route53] Rate limited")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[route53] Invalid credentials: {msg}")
                } else {
                    write!(f, "[route53] Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[route53] Permission denied: {msg}")
                } else {
                    write!(f, "[route53] Permission denied")
                }
            }
            Self::ZoneNotFound {
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[route53] Hosted zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "[route53] Hosted zone '{zone_id}' not found")
                }
            }
            Self::ZoneExists { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[route53] Hosted zone already exists: {msg}")
                } else {
                    write!(f, "[route53] Hosted zone already exists")
                }
            }
            Self::ZoneNotEmpty { zone_id, .. } => {
                write!(f, "[route53] Hosted zone '{zone_id}' still contains record sets")
            }
            Self::InvalidChangeBatch { messages } => {
                write!(f, "[route53] Invalid change batch: {}", messages.join("; "))
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "[route53] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedRecordType { record_type } => {
                write!(f, "[route53] Unsupported record type: {record_type}")
            }
            Self::QuotaExceeded { .. } => write!(f, "[route53] Quota exceeded"),
            Self::ParseError { detail } => write!(f, "[route53] Parse error: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "[route53] Serialization error: {detail}")
            }
            Self::Unknown { raw_message, .. } => write!(f, "[route53] {raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
