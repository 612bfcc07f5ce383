//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use route53_provider::ProviderError;

/// Core layer error type
///
/// Everything except [`Provider`](Self::Provider) is raised locally, before
/// any request is sent.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A change action other than `CREATE` or `DELETE`
    #[error("Invalid change action: {0:?} (expected CREATE or DELETE)")]
    InvalidAction(String),

    /// Create or delete attempted on a record type the provider never lets you touch
    #[error("{record_type} record sets are immutable: {name}")]
    ImmutableRecord { record_type: String, name: String },

    /// Mutation attempted on a zone that has already been deleted
    #[error("Hosted zone already deleted: {0}")]
    AlreadyDeleted(String),

    /// A listing page carried one continuation field but not its required partner
    #[error("Listing response carries {present} but not {missing}")]
    MissingContinuationField {
        present: &'static str,
        missing: &'static str,
    },

    /// Local record field validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider or transport error, passed through unchanged
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether this is an expected error (user input / missing resource, etc.)
    ///
    /// Expected errors are logged at `warn`; the rest at `error`.
    ///
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidAction(_)
            | Self::ImmutableRecord { .. }
            | Self::AlreadyDeleted(_)
            | Self::Validation(_) => true,
            Self::MissingContinuationField { .. } => false,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
