//! Route 53 transport
//!
//! Signs every request with AWS Signature Version 4 and maps Route 53 error
//! documents onto [`ProviderError`](crate::ProviderError).

mod error;
mod http;
mod sign;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::{Route53Credentials, TransportConfig};

/// Service name in the `SigV4` credential scope.
pub(crate) const SERVICE_NAME: &str = "route53";

/// Authenticated HTTP transport for the Route 53 REST API.
///
/// Holds no per-request state; one instance can serve concurrent requests.
///
/// # Construction
///
/// ```rust,no_run
/// use route53_provider::{Route53Credentials, Route53Transport};
///
/// # fn main() -> route53_provider::Result<()> {
/// let transport = Route53Transport::builder(Route53Credentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
/// ))
/// .max_retries(4)
/// .build()?;
/// # Ok(())
/// # }
/// ```
pub struct Route53Transport {
    pub(crate) client: Client,
    pub(crate) credentials: Route53Credentials,
    pub(crate) config: TransportConfig,
}

impl std::fmt::Debug for Route53Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route53Transport")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Route53Transport`].
pub struct Route53TransportBuilder {
    credentials: Route53Credentials,
    config: TransportConfig,
}

impl Route53TransportBuilder {
    fn new(credentials: Route53Credentials) -> Self {
        Self {
            credentials,
            config: TransportConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    /// Point at another endpoint (a local stub, for instance).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set connect and whole-request timeouts, in seconds.
    pub fn timeouts(mut self, connect_secs: u64, request_secs: u64) -> Self {
        self.config.connect_timeout_secs = connect_secs;
        self.config.request_timeout_secs = request_secs;
        self
    }

    /// Build the [`Route53Transport`] instance.
    pub fn build(self) -> Result<Route53Transport> {
        Ok(Route53Transport {
            client: create_http_client(&self.config)?,
            credentials: self.credentials,
            config: self.config,
        })
    }
}

impl Route53Transport {
    /// Creates a transport with the default configuration.
    pub fn new(credentials: Route53Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the transport configuration.
    pub fn builder(credentials: Route53Credentials) -> Route53TransportBuilder {
        Route53TransportBuilder::new(credentials)
    }

    /// The active configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

fn create_http_client(config: &TransportConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_config() {
        let transport = require_ok!(
            Route53Transport::builder(Route53Credentials::new("ak", "sk"))
                .endpoint("http://localhost:4566")
                .max_retries(0)
                .timeouts(1, 5)
                .build()
        );
        let config = transport.config();
        assert_eq!(config.endpoint, "http://localhost:4566");
        assert_eq!(config.host(), "localhost:4566");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn debug_hides_secret() {
        let transport = require_ok!(Route53Transport::new(Route53Credentials::new(
            "AKIDEXAMPLE",
            "very-secret"
        )));
        assert!(!format!("{transport:?}").contains("very-secret"));
    }
}
