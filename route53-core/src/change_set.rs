//! Change sets
//!
//! A batch of creations and deletions for one hosted zone, submitted as a
//! single atomic request. Deletions always go out before creations, so a
//! delete-then-create replacement never collides with the record it
//! replaces.

use crate::error::CoreResult;
use crate::types::{ChangeAction, RecordFields, RecordSet, RecordType};

/// One entry of a [`ChangeSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub action: ChangeAction,
    pub kind: RecordType,
    /// The fields sent on the wire for this change.
    pub fields: RecordFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    zone_id: String,
    deletions: Vec<Change>,
    creations: Vec<Change>,
}

impl ChangeSet {
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            deletions: Vec::new(),
            creations: Vec::new(),
        }
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Queue a change by action name (`CREATE` / `DELETE`, any case).
    ///
    /// No deduplication and no field checks happen here; the provider
    /// judges the batch as a whole.
    pub fn add_change(&mut self, action: &str, record_set: &RecordSet) -> CoreResult<()> {
        let action = action.parse::<ChangeAction>()?;
        self.push(action, record_set);
        Ok(())
    }

    /// Queue a change. DELETE uses the record set's last-synced snapshot,
    /// CREATE its working copy.
    pub fn push(&mut self, action: ChangeAction, record_set: &RecordSet) {
        let fields = match action {
            ChangeAction::Delete => record_set.synced().clone(),
            ChangeAction::Create => record_set.fields().clone(),
        };
        self.push_fields(action, record_set.kind(), fields);
    }

    /// Queue a change from raw fields.
    pub fn push_fields(&mut self, action: ChangeAction, kind: RecordType, fields: RecordFields) {
        let change = Change {
            action,
            kind,
            fields,
        };
        match action {
            ChangeAction::Delete => self.deletions.push(change),
            ChangeAction::Create => self.creations.push(change),
        }
    }

    pub fn deletions(&self) -> &[Change] {
        &self.deletions
    }

    pub fn creations(&self) -> &[Change] {
        &self.creations
    }

    /// Submission order: every deletion, then every creation, each in
    /// insertion order.
    pub fn changes(&self) -> impl Iterator<Item = &Change> {
        self.deletions.iter().chain(self.creations.iter())
    }

    pub fn len(&self) -> usize {
        self.deletions.len() + self.creations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.creations.is_empty()
    }
}
