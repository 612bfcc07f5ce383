//! Gateway configuration

use serde::{Deserialize, Serialize};

/// Largest `maxitems` accepted by `ListHostedZones`.
pub const MAX_ZONE_PAGE_SIZE: u32 = 100;
/// Largest `maxitems` accepted by `ListResourceRecordSets`.
pub const MAX_RECORD_PAGE_SIZE: u32 = 300;

/// Page sizes for listings, threaded through [`Route53Gateway::new`](crate::Route53Gateway::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayConfig {
    pub zone_page_size: u32,
    pub record_page_size: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            zone_page_size: 100,
            record_page_size: 100,
        }
    }
}

impl GatewayConfig {
    /// Clamp page sizes into what the API accepts.
    #[must_use]
    pub fn validated(self) -> Self {
        Self {
            zone_page_size: self.zone_page_size.clamp(1, MAX_ZONE_PAGE_SIZE),
            record_page_size: self.record_page_size.clamp(1, MAX_RECORD_PAGE_SIZE),
        }
    }
}
