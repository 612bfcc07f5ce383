//! Route 53 Core Library
//!
//! Zone and record-set management on top of `route53-provider`:
//! - Lazy, page-by-page listings of hosted zones and record sets
//! - Change sets: atomic create/delete batches, deletions first
//! - Record sets with a synced snapshot and a working copy (`save` = delete + create)
//! - Zone lifecycle: a deleted zone refuses every further mutation
//!
//! Everything goes through [`Route53Gateway`]; the transport underneath is
//! any [`route53_provider::Transport`].
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use route53_core::{RecordFields, Route53Credentials, Route53Gateway};
//!
//! # async fn run() -> route53_core::CoreResult<()> {
//! let credentials = Route53Credentials::from_env()
//!     .map_err(|e| route53_core::CoreError::Validation(e.to_string()))?;
//! let gateway = Route53Gateway::connect(credentials)?;
//!
//! let mut zones = gateway.list_zones();
//! while let Some(zone) = zones.try_next().await? {
//!     println!("{} {}", zone.id, zone.name);
//! }
//!
//! let (zone, _) = gateway.create_zone("example.com.", None, None).await?;
//! let (mut record, _) = gateway
//!     .create_a_record(&zone, RecordFields::new("www.example.com.", ["192.0.2.1"], 300))
//!     .await?;
//! record.fields_mut().data = route53_core::RecordData::Values {
//!     ttl: 60,
//!     values: vec!["192.0.2.2".into()],
//! };
//! record.save(&zone, &gateway).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod change_set;
mod codec;
pub mod config;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod pagination;
pub mod types;

// Re-export common types
pub use change_set::{Change, ChangeSet};
pub use config::GatewayConfig;
pub use error::{CoreError, CoreResult, ProviderError};
pub use gateway::{RecordSetQuery, Route53Gateway};
pub use lifecycle::ZoneState;
pub use types::{
    AliasTarget, ChangeAction, ChangeInfo, ChangeStatus, RecordData, RecordFields, RecordSet,
    RecordType, RecordTypeTraits, Zone,
};

// Re-export transport configuration for callers building their own gateway
pub use route53_provider::{Route53Credentials, Transport, TransportConfig};
