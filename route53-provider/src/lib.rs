//! # route53-provider
//!
//! Wire-level access to the AWS Route 53 REST API (version `2013-04-01`):
//! an authenticated [`Transport`], the XML codec for request and response
//! documents, and the mapping of Route 53 error documents onto
//! [`ProviderError`].
//!
//! Higher-level semantics (typed zones and record sets, change sets,
//! pagination) live in `route53-core`, which consumes this crate through
//! the [`Transport`] trait only.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use route53_provider::{
//!     HttpMethod, RequestPayload, Route53Credentials, Transport, TransportConfig,
//!     create_transport,
//!     xml::{ListHostedZonesResponse, from_xml},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Route53Credentials::from_env()?;
//!     let transport = create_transport(credentials, TransportConfig::default())?;
//!
//!     let body = transport
//!         .send(
//!             "hostedzone",
//!             RequestPayload::Query(vec![("maxitems".into(), "10".into())]),
//!             HttpMethod::Get,
//!         )
//!         .await?;
//!     let page: ListHostedZonesResponse = from_xml(&body)?;
//!     for zone in &page.hosted_zones.items {
//!         println!("{} {}", zone.id, zone.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, ProviderError>`](ProviderError). Transient
//! errors (`NetworkError`, `Timeout`, `RateLimited`) are retried inside the
//! transport with exponential backoff; everything else is returned as is.

#[cfg(test)]
#[macro_use]
mod test_macros;

mod error;
mod factory;
mod http_client;
mod route53;
mod traits;
mod types;
mod utils;
pub mod xml;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the transport
pub use factory::create_transport;
pub use route53::{Route53Transport, Route53TransportBuilder};
pub use traits::Transport;

// Re-export request and configuration types
pub use types::{
    CredentialValidationError, HttpMethod, RequestPayload, Route53Credentials, TransportConfig,
};

// Re-export timestamp parsing for consumers decoding their own documents
pub use utils::datetime::parse_timestamp;
