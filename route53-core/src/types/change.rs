//! Change actions and submitted-change metadata

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The two verbs a change batch understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Create,
    Delete,
}

impl ChangeAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeAction {
    type Err = CoreError;

    /// Case-insensitive; anything but create/delete is [`CoreError::InvalidAction`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("CREATE") {
            Ok(Self::Create)
        } else if s.eq_ignore_ascii_case("DELETE") {
            Ok(Self::Delete)
        } else {
            Err(CoreError::InvalidAction(s.to_string()))
        }
    }
}

/// Propagation state of a submitted change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChangeStatus {
    /// Accepted, not yet on every authoritative server.
    Pending,
    /// Live on every authoritative server.
    InSync,
    Other(String),
}

impl From<&str> for ChangeStatus {
    fn from(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "INSYNC" => Self::InSync,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Metadata returned for every accepted change (zone creation and
/// deletion included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Change id without the `/change/` prefix.
    pub id: String,
    pub status: ChangeStatus,
    pub submitted_at: DateTime<Utc>,
    pub comment: Option<String>,
}

impl ChangeInfo {
    pub fn is_in_sync(&self) -> bool {
        self.status == ChangeStatus::InSync
    }
}
