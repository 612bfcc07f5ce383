//! Record set model
//!
//! One tagged type covers all ten record kinds. Per-kind behaviour comes
//! from [`RecordType::traits`], not from separate types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::change_set::ChangeSet;
use crate::codec::strip_zone_id_prefix;
use crate::error::{CoreError, CoreResult, ProviderError};
use crate::gateway::Route53Gateway;
use crate::types::{ChangeAction, ChangeInfo, Zone};

/// Longest `SetIdentifier` Route 53 accepts.
pub const MAX_SET_IDENTIFIER_LEN: usize = 128;

// ============ Record type ============

/// The record kinds this client models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Spf,
    Srv,
    Txt,
}

/// Behaviour flags for one [`RecordType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTypeTraits {
    /// Creation and deletion always fail (SOA).
    pub immutable: bool,
    /// Created and owned by the provider; skipped when purging a zone.
    pub provider_managed: bool,
    /// May point at another AWS resource instead of carrying values.
    pub supports_alias: bool,
}

impl RecordType {
    /// Every modelled kind, in wire-name order.
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Ns,
        Self::Ptr,
        Self::Soa,
        Self::Spf,
        Self::Srv,
        Self::Txt,
    ];

    /// Wire name, e.g. `AAAA`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Soa => "SOA",
            Self::Spf => "SPF",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        }
    }

    pub const fn traits(self) -> RecordTypeTraits {
        match self {
            Self::Soa => RecordTypeTraits {
                immutable: true,
                provider_managed: true,
                supports_alias: false,
            },
            Self::Ns => RecordTypeTraits {
                immutable: false,
                provider_managed: true,
                supports_alias: false,
            },
            Self::A | Self::Cname => RecordTypeTraits {
                immutable: false,
                provider_managed: false,
                supports_alias: true,
            },
            Self::Aaaa | Self::Mx | Self::Ptr | Self::Spf | Self::Srv | Self::Txt => {
                RecordTypeTraits {
                    immutable: false,
                    provider_managed: false,
                    supports_alias: false,
                }
            }
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == upper)
            .ok_or_else(|| {
                ProviderError::UnsupportedRecordType {
                    record_type: s.to_string(),
                }
                .into()
            })
    }
}

// ============ Fields ============

/// Target of an alias-mode A or CNAME record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasTarget {
    /// Hosted zone of the target resource (not the zone holding the alias).
    pub hosted_zone_id: String,
    pub dns_name: String,
    #[serde(default)]
    pub evaluate_target_health: bool,
}

impl AliasTarget {
    pub fn new(hosted_zone_id: impl Into<String>, dns_name: impl Into<String>) -> Self {
        Self {
            hosted_zone_id: hosted_zone_id.into(),
            dns_name: dns_name.into(),
            evaluate_target_health: false,
        }
    }
}

/// Literal values with a TTL, or an alias. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum RecordData {
    Values { ttl: u32, values: Vec<String> },
    Alias(AliasTarget),
}

/// The editable part of a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    /// Fully-qualified name, e.g. `www.example.com.`
    pub name: String,
    pub data: RecordData,
    /// Weighted routing, 0-255.
    pub weight: Option<u8>,
    /// Latency-based routing region, e.g. `us-west-1`.
    pub region: Option<String>,
    /// Distinguishes sets sharing (name, type); required with weight or region.
    pub set_identifier: Option<String>,
}

impl RecordFields {
    /// A plain record set carrying literal values.
    pub fn new<I, S>(name: impl Into<String>, values: I, ttl: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            data: RecordData::Values {
                ttl,
                values: values.into_iter().map(Into::into).collect(),
            },
            weight: None,
            region: None,
            set_identifier: None,
        }
    }

    /// An alias-mode record set.
    pub fn alias(name: impl Into<String>, target: AliasTarget) -> Self {
        Self {
            name: name.into(),
            data: RecordData::Alias(target),
            weight: None,
            region: None,
            set_identifier: None,
        }
    }

    #[must_use]
    pub fn with_set_identifier(mut self, set_identifier: impl Into<String>) -> Self {
        self.set_identifier = Some(set_identifier.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u8) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// `None` in alias mode.
    pub fn ttl(&self) -> Option<u32> {
        match &self.data {
            RecordData::Values { ttl, .. } => Some(*ttl),
            RecordData::Alias(_) => None,
        }
    }

    /// Empty in alias mode.
    pub fn values(&self) -> &[String] {
        match &self.data {
            RecordData::Values { values, .. } => values,
            RecordData::Alias(_) => &[],
        }
    }

    pub fn alias_target(&self) -> Option<&AliasTarget> {
        match &self.data {
            RecordData::Alias(target) => Some(target),
            RecordData::Values { .. } => None,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.data, RecordData::Alias(_))
    }

    /// Local checks run before anything is submitted.
    pub fn validate(&self, kind: RecordType) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("record name must not be empty".into()));
        }

        match &self.data {
            RecordData::Values { values, .. } if values.is_empty() => {
                return Err(CoreError::Validation(format!(
                    "{kind} record set {} has no values",
                    self.name
                )));
            }
            RecordData::Alias(_) if !kind.traits().supports_alias => {
                return Err(CoreError::Validation(format!(
                    "{kind} record sets cannot be aliases"
                )));
            }
            _ => {}
        }

        if let Some(id) = &self.set_identifier
            && (id.is_empty() || id.chars().count() > MAX_SET_IDENTIFIER_LEN)
        {
            return Err(CoreError::Validation(format!(
                "set identifier must be 1-{MAX_SET_IDENTIFIER_LEN} characters"
            )));
        }

        if self.weight.is_some() && self.region.is_some() {
            return Err(CoreError::Validation(
                "weight and region are mutually exclusive".into(),
            ));
        }

        if (self.weight.is_some() || self.region.is_some()) && self.set_identifier.is_none() {
            return Err(CoreError::Validation(
                "weighted and latency record sets need a set identifier".into(),
            ));
        }

        Ok(())
    }
}

// ============ Record set ============

/// A record set in one hosted zone.
///
/// `synced` is what the provider last confirmed; `current` is the working
/// copy. Edits to `current` only take effect through [`save`](Self::save).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    zone_id: String,
    kind: RecordType,
    synced: RecordFields,
    current: RecordFields,
}

impl RecordSet {
    /// A record set whose fields are known to match the provider.
    pub fn new(zone_id: impl Into<String>, kind: RecordType, fields: RecordFields) -> Self {
        Self {
            zone_id: zone_id.into(),
            kind,
            synced: fields.clone(),
            current: fields,
        }
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn kind(&self) -> RecordType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.current.name
    }

    /// Working copy.
    pub fn fields(&self) -> &RecordFields {
        &self.current
    }

    /// Last-synced snapshot; deletions are built from it.
    pub fn synced(&self) -> &RecordFields {
        &self.synced
    }

    /// Mutable working copy. Changes are local until [`save`](Self::save).
    pub fn fields_mut(&mut self) -> &mut RecordFields {
        &mut self.current
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.synced
    }

    fn ensure_mutable(&self) -> CoreResult<()> {
        if self.kind.traits().immutable {
            return Err(CoreError::ImmutableRecord {
                record_type: self.kind.to_string(),
                name: self.synced.name.clone(),
            });
        }
        Ok(())
    }

    /// `zone` must be the live zone this record set belongs to.
    fn ensure_zone(&self, zone: &Zone) -> CoreResult<()> {
        zone.ensure_active()?;
        if strip_zone_id_prefix(&zone.id) != strip_zone_id_prefix(&self.zone_id) {
            return Err(CoreError::Validation(format!(
                "record set {} belongs to zone {}, not {}",
                self.synced.name, self.zone_id, zone.id
            )));
        }
        Ok(())
    }

    /// Replace the record set on the provider with the working copy.
    ///
    /// Route 53 has no modify verb: this submits DELETE (synced snapshot)
    /// then CREATE (working copy) as one atomic batch. The snapshot is
    /// reset only if the batch is accepted.
    pub async fn save(&mut self, zone: &Zone, gateway: &Route53Gateway) -> CoreResult<ChangeInfo> {
        self.ensure_zone(zone)?;
        self.ensure_mutable()?;
        self.current.validate(self.kind)?;

        let mut change_set = ChangeSet::new(self.zone_id.clone());
        change_set.push(ChangeAction::Delete, self);
        change_set.push(ChangeAction::Create, self);

        let info = gateway.change_record_sets(&change_set, None).await?;
        self.synced = self.current.clone();
        Ok(info)
    }

    /// Delete the record set as last synced, ignoring unsaved edits.
    pub async fn delete(&self, zone: &Zone, gateway: &Route53Gateway) -> CoreResult<ChangeInfo> {
        self.ensure_zone(zone)?;
        self.ensure_mutable()?;

        let mut change_set = ChangeSet::new(self.zone_id.clone());
        change_set.push(ChangeAction::Delete, self);

        gateway.change_record_sets(&change_set, None).await
    }
}
