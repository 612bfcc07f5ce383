//! Transport abstraction

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{HttpMethod, RequestPayload};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Route 53 error code, e.g. `NoSuchHostedZone`
    pub code: Option<String>,
    /// Original error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information used when mapping a raw error (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Hosted zone the request targeted, if any
    pub zone_id: Option<String>,
}

impl ErrorContext {
    /// Derives the context from a request path such as `hostedzone/Z123/rrset`.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.trim_start_matches('/').split('/');
        let zone_id = match (segments.next(), segments.next()) {
            (Some("hostedzone"), Some(id)) if !id.is_empty() => Some(id.to_string()),
            _ => None,
        };
        Self { zone_id }
    }
}

/// Maps raw API errors onto [`ProviderError`] (internal use)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in log lines
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Sends one authenticated request and returns the raw response body.
///
/// Implementations attach authentication, perform any retrying of transient
/// failures themselves, and turn every non-success response into a
/// [`ProviderError`]. Callers never interpret status codes.
///
/// Implementations must be safe to share between tasks: two independent
/// requests may be in flight at once, so no per-request state may live on
/// the transport itself.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `payload` to `path` (relative to the versioned API root, e.g.
    /// `hostedzone/Z123/rrset`).
    async fn send(&self, path: &str, payload: RequestPayload, method: HttpMethod)
    -> Result<String>;
}
