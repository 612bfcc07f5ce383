//! Hosted zone model

use serde::Serialize;

use crate::error::CoreResult;
use crate::gateway::Route53Gateway;
use crate::lifecycle::ZoneState;

/// A hosted zone.
///
/// Nameservers are fetched at most once: zones from listings and creations
/// start without them, and the first call to [`nameservers`](Self::nameservers)
/// fills the cache for the zone's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone id without the `/hostedzone/` prefix.
    pub id: String,
    /// Domain name, e.g. `example.com.`
    pub name: String,
    /// Idempotency token used when the zone was created.
    pub caller_reference: String,
    pub record_set_count: Option<u64>,
    pub comment: Option<String>,
    nameservers: Option<Vec<String>>,
    state: ZoneState,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        caller_reference: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            caller_reference: caller_reference.into(),
            record_set_count: None,
            comment: None,
            nameservers: None,
            state: ZoneState::Active,
        }
    }

    #[must_use]
    pub fn with_nameservers(mut self, nameservers: Vec<String>) -> Self {
        self.nameservers = Some(nameservers);
        self
    }

    /// Authoritative nameservers, fetched on first access.
    pub async fn nameservers(&mut self, gateway: &Route53Gateway) -> CoreResult<&[String]> {
        if self.nameservers.is_none() {
            let fetched = gateway.fetch_nameservers(&self.id).await?;
            self.nameservers = Some(fetched);
        }
        Ok(self.nameservers.as_deref().unwrap_or_default())
    }

    /// Nameservers if already fetched; never triggers a request.
    pub fn cached_nameservers(&self) -> Option<&[String]> {
        self.nameservers.as_deref()
    }

    pub fn state(&self) -> ZoneState {
        self.state
    }

    pub fn is_deleted(&self) -> bool {
        self.state == ZoneState::Deleted
    }

    /// Pre-flight check for every mutating operation.
    pub fn ensure_active(&self) -> CoreResult<()> {
        self.state.ensure_active(&self.id)
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.state.mark_deleted();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::GatewayConfig;
    use crate::error::CoreError;
    use crate::test_utils::{MockTransport, fixtures};
    use route53_provider::Transport;

    #[test]
    fn new_zone_is_active_without_nameservers() {
        let zone = Zone::new("Z1", "example.com.", "ref-1");
        assert!(!zone.is_deleted());
        assert!(zone.ensure_active().is_ok());
        assert!(zone.cached_nameservers().is_none());
    }

    #[test]
    fn deleted_zone_fails_guard() {
        let mut zone = Zone::new("Z1", "example.com.", "ref-1");
        zone.mark_deleted();
        assert_eq!(zone.state(), ZoneState::Deleted);
        assert!(matches!(zone.ensure_active(), Err(CoreError::AlreadyDeleted(_))));
    }

    #[tokio::test]
    async fn prefilled_nameservers_skip_the_fetch() {
        let mock = MockTransport::new();
        let transport: Arc<dyn Transport> = mock.clone();
        let gateway = Route53Gateway::new(transport, GatewayConfig::default());
        let mut zone = Zone::new("Z1", "example.com.", "ref-1")
            .with_nameservers(vec!["ns-1.awsdns-01.org.".to_string()]);

        let nameservers = require_ok!(zone.nameservers(&gateway).await);
        assert_eq!(nameservers, ["ns-1.awsdns-01.org."]);
        assert_eq!(mock.request_count().await, 0);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_cache_empty() {
        let mock = MockTransport::with_responses(["not xml at all"]);
        mock.push_ok(fixtures::get_zone("Z1", "example.com.", &["ns-1.awsdns-01.org."]))
            .await;
        let transport: Arc<dyn Transport> = mock.clone();
        let gateway = Route53Gateway::new(transport, GatewayConfig::default());
        let mut zone = Zone::new("Z1", "example.com.", "ref-1");

        assert!(zone.nameservers(&gateway).await.is_err());
        assert!(zone.cached_nameservers().is_none());
        assert_eq!(require_ok!(zone.nameservers(&gateway).await).len(), 1);
        assert_eq!(mock.request_count().await, 2);
    }
}
