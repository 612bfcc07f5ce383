//! Zone lifecycle guard
//!
//! `Active -> Deleted`, and `Deleted` is terminal.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneState {
    #[default]
    Active,
    Deleted,
}

impl ZoneState {
    /// Fails with [`CoreError::AlreadyDeleted`] once the zone is deleted.
    pub fn ensure_active(self, zone_id: &str) -> CoreResult<()> {
        match self {
            Self::Active => Ok(()),
            Self::Deleted => Err(CoreError::AlreadyDeleted(zone_id.to_string())),
        }
    }

    pub(crate) fn mark_deleted(&mut self) {
        *self = Self::Deleted;
    }
}
