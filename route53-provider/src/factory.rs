//! Transport factory.

use std::sync::Arc;

use crate::error::Result;
use crate::route53::Route53Transport;
use crate::traits::Transport;
use crate::types::{Route53Credentials, TransportConfig};

/// Creates a [`Transport`] from credentials and connection settings.
///
/// The transport is wrapped in `Arc<dyn Transport>` for sharing across
/// async tasks and for substitution with a scripted transport in tests.
///
/// # Examples
///
/// ```rust,no_run
/// use route53_provider::{create_transport, Route53Credentials, TransportConfig};
///
/// let transport = create_transport(
///     Route53Credentials::new("your-access-key-id", "your-secret-access-key"),
///     TransportConfig::default(),
/// );
/// ```
pub fn create_transport(
    credentials: Route53Credentials,
    config: TransportConfig,
) -> Result<Arc<dyn Transport>> {
    let transport = Route53Transport::builder(credentials)
        .config(config)
        .build()?;
    Ok(Arc::new(transport))
}
