//! Zone and record gateway
//!
//! The public entry point: listings go through the pagination engine,
//! mutations through change sets.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use route53_provider::xml::{
    ChangeResourceRecordSetsResponse, CreateHostedZoneRequest, CreateHostedZoneResponse,
    DeleteHostedZoneResponse, GetChangeResponse, GetHostedZoneResponse, from_xml, to_xml,
};
use route53_provider::{
    HttpMethod, ProviderError, RequestPayload, Route53Credentials, Transport, TransportConfig,
    create_transport,
};
use uuid::Uuid;

use crate::change_set::ChangeSet;
use crate::codec::{self, strip_change_id_prefix, strip_zone_id_prefix};
use crate::config::GatewayConfig;
use crate::error::{CoreError, CoreResult};
use crate::pagination::{ResumeKeys, paginate};
use crate::types::{ChangeAction, ChangeInfo, RecordFields, RecordSet, RecordType, Zone};

const PAGE_SIZE_PARAM: &str = "maxitems";

/// Where a record set listing starts.
///
/// Route 53 orders record sets by name (labels reversed), then type, then
/// set identifier. A type needs a name, and an identifier needs a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSetQuery {
    pub name: Option<String>,
    pub record_type: Option<RecordType>,
    pub identifier: Option<String>,
}

impl RecordSetQuery {
    fn into_params(self) -> CoreResult<BTreeMap<String, String>> {
        if self.record_type.is_some() && self.name.is_none() {
            return Err(CoreError::Validation(
                "a record type start position needs a record name".into(),
            ));
        }
        if self.identifier.is_some() && self.record_type.is_none() {
            return Err(CoreError::Validation(
                "a set identifier start position needs a record type".into(),
            ));
        }

        let mut params = BTreeMap::new();
        if let Some(name) = self.name {
            params.insert("name".to_string(), name);
        }
        if let Some(kind) = self.record_type {
            params.insert("type".to_string(), kind.as_str().to_string());
        }
        if let Some(identifier) = self.identifier {
            params.insert("identifier".to_string(), identifier);
        }
        Ok(params)
    }
}

/// Client for hosted zones and record sets.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct Route53Gateway {
    transport: Arc<dyn Transport>,
    config: GatewayConfig,
}

impl fmt::Debug for Route53Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route53Gateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Route53Gateway {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, config: GatewayConfig) -> Self {
        Self {
            transport,
            config: config.validated(),
        }
    }

    /// Gateway over the default HTTPS transport and default page sizes.
    pub fn connect(credentials: Route53Credentials) -> CoreResult<Self> {
        let transport = create_transport(credentials, TransportConfig::default())?;
        Ok(Self::new(transport, GatewayConfig::default()))
    }

    pub fn config(&self) -> GatewayConfig {
        self.config
    }

    // ============ Zones ============

    /// Every hosted zone on the account, fetched page by page as the stream
    /// is consumed. Zones come without nameservers.
    pub fn list_zones(&self) -> BoxStream<'static, CoreResult<Zone>> {
        let params = BTreeMap::from([(
            PAGE_SIZE_PARAM.to_string(),
            self.config.zone_page_size.to_string(),
        )]);
        paginate(
            Arc::clone(&self.transport),
            "hostedzone",
            params,
            ResumeKeys::ZONES,
            codec::zone_page(),
        )
    }

    /// A single zone, nameservers included.
    pub async fn get_zone(&self, zone_id: &str) -> CoreResult<Zone> {
        let doc = self.fetch_hosted_zone(zone_id).await?;
        let nameservers = doc
            .delegation_set
            .map(|d| d.name_servers.items)
            .unwrap_or_default();
        Ok(codec::zone_from_xml(doc.hosted_zone).with_nameservers(nameservers))
    }

    pub(crate) async fn fetch_nameservers(&self, zone_id: &str) -> CoreResult<Vec<String>> {
        log::debug!("[route53] Fetching nameservers for zone {zone_id}");
        let doc = self.fetch_hosted_zone(zone_id).await?;
        Ok(doc
            .delegation_set
            .map(|d| d.name_servers.items)
            .unwrap_or_default())
    }

    async fn fetch_hosted_zone(&self, zone_id: &str) -> CoreResult<GetHostedZoneResponse> {
        let path = format!("hostedzone/{}", strip_zone_id_prefix(zone_id));
        let body = self
            .transport
            .send(&path, RequestPayload::Empty, HttpMethod::Get)
            .await?;
        Ok(from_xml(&body)?)
    }

    /// Create a hosted zone.
    ///
    /// Without a caller reference a random one is generated. Resubmitting
    /// the same reference is recognised by Route 53 as the same request.
    /// The returned zone has no nameservers cached yet.
    pub async fn create_zone(
        &self,
        name: &str,
        caller_reference: Option<&str>,
        comment: Option<&str>,
    ) -> CoreResult<(Zone, ChangeInfo)> {
        let caller_reference = caller_reference
            .filter(|r| !r.is_empty())
            .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

        let body = to_xml(&CreateHostedZoneRequest::new(name, caller_reference, comment))?;
        let response = self
            .transport
            .send("hostedzone", RequestPayload::Body(body), HttpMethod::Post)
            .await?;
        let doc: CreateHostedZoneResponse = from_xml(&response)?;

        let zone = codec::zone_from_xml(doc.hosted_zone);
        let info = codec::change_info_from_xml(doc.change_info);
        log::info!(
            "[route53] Created hosted zone {} ({}), change {}",
            zone.name,
            zone.id,
            info.id
        );
        Ok((zone, info))
    }

    /// Delete a hosted zone by id, with no lifecycle tracking.
    pub async fn delete_zone_by_id(&self, zone_id: &str) -> CoreResult<ChangeInfo> {
        let zone_id = strip_zone_id_prefix(zone_id);
        let response = self
            .transport
            .send(
                &format!("hostedzone/{zone_id}"),
                RequestPayload::Empty,
                HttpMethod::Delete,
            )
            .await?;
        let doc: DeleteHostedZoneResponse = from_xml(&response)?;
        log::info!("[route53] Deleted hosted zone {zone_id}");
        Ok(codec::change_info_from_xml(doc.change_info))
    }

    /// Delete a zone and mark it deleted.
    ///
    /// With `force`, every record set except the provider-managed SOA and
    /// NS sets is deleted first in one batch. That batch is not undone if
    /// the zone deletion then fails. Without `force`, a zone holding other
    /// record sets is refused by Route 53.
    pub async fn delete_zone(&self, zone: &mut Zone, force: bool) -> CoreResult<ChangeInfo> {
        zone.ensure_active()?;

        if force {
            let mut purge = ChangeSet::new(zone.id.clone());
            let mut record_sets = self.list_record_sets(&zone.id);
            while let Some(record_set) = record_sets.try_next().await? {
                if !record_set.kind().traits().provider_managed {
                    purge.push(ChangeAction::Delete, &record_set);
                }
            }

            if purge.is_empty() {
                log::debug!("[route53] Zone {} holds no deletable record sets", zone.id);
            } else {
                log::info!(
                    "[route53] Purging {} record set(s) from zone {}",
                    purge.len(),
                    zone.id
                );
                self.change_record_sets(&purge, None).await?;
            }
        }

        let info = self.delete_zone_by_id(&zone.id).await?;
        zone.mark_deleted();
        Ok(info)
    }

    // ============ Record sets ============

    /// Every record set in a zone, in Route 53 order.
    pub fn list_record_sets(&self, zone_id: &str) -> BoxStream<'static, CoreResult<RecordSet>> {
        self.list_record_sets_from(zone_id, RecordSetQuery::default())
    }

    /// Record sets starting at the given position.
    ///
    /// An inconsistent start position is reported as the stream's only item.
    pub fn list_record_sets_from(
        &self,
        zone_id: &str,
        query: RecordSetQuery,
    ) -> BoxStream<'static, CoreResult<RecordSet>> {
        let mut params = match query.into_params() {
            Ok(params) => params,
            Err(e) => return stream::once(future::ready(Err(e))).boxed(),
        };
        params.insert(
            PAGE_SIZE_PARAM.to_string(),
            self.config.record_page_size.to_string(),
        );

        let zone_id = strip_zone_id_prefix(zone_id).to_string();
        paginate(
            Arc::clone(&self.transport),
            format!("hostedzone/{zone_id}/rrset"),
            params,
            ResumeKeys::RECORD_SETS,
            codec::record_set_page(zone_id),
        )
    }

    /// Submit a change set as one atomic batch.
    ///
    /// Deletions are sent before creations. Changes targeting an immutable
    /// kind and empty change sets are refused without a request.
    pub async fn change_record_sets(
        &self,
        change_set: &ChangeSet,
        comment: Option<&str>,
    ) -> CoreResult<ChangeInfo> {
        if let Some(change) = change_set.changes().find(|c| c.kind.traits().immutable) {
            return Err(CoreError::ImmutableRecord {
                record_type: change.kind.to_string(),
                name: change.fields.name.clone(),
            });
        }
        if change_set.is_empty() {
            return Err(CoreError::Validation("change set is empty".into()));
        }

        let zone_id = strip_zone_id_prefix(change_set.zone_id());
        let body = codec::change_batch_body(change_set, comment)?;
        log::info!(
            "[route53] Submitting {} deletion(s) and {} creation(s) to zone {zone_id}",
            change_set.deletions().len(),
            change_set.creations().len()
        );

        let response = self
            .transport
            .send(
                &format!("hostedzone/{zone_id}/rrset"),
                RequestPayload::Body(body),
                HttpMethod::Post,
            )
            .await?;
        let doc: ChangeResourceRecordSetsResponse = from_xml(&response)?;

        match doc.change_info {
            Some(info) => Ok(codec::change_info_from_xml(info)),
            None => {
                let error = doc.error.unwrap_or_default();
                Err(ProviderError::Unknown {
                    raw_code: error.code,
                    raw_message: error
                        .message
                        .unwrap_or_else(|| "change response carries no ChangeInfo".to_string()),
                }
                .into())
            }
        }
    }

    /// Current status of a submitted change.
    pub async fn get_change(&self, change_id: &str) -> CoreResult<ChangeInfo> {
        let path = format!("change/{}", strip_change_id_prefix(change_id));
        let response = self
            .transport
            .send(&path, RequestPayload::Empty, HttpMethod::Get)
            .await?;
        let doc: GetChangeResponse = from_xml(&response)?;
        Ok(codec::change_info_from_xml(doc.change_info))
    }

    /// The zone a record set belongs to, fetched fresh on every call.
    pub async fn record_set_zone(&self, record_set: &RecordSet) -> CoreResult<Zone> {
        self.get_zone(record_set.zone_id()).await
    }

    // ============ Record creation ============

    /// Create one record set in `zone`.
    pub async fn create_record(
        &self,
        zone: &Zone,
        kind: RecordType,
        fields: RecordFields,
    ) -> CoreResult<(RecordSet, ChangeInfo)> {
        zone.ensure_active()?;
        if kind.traits().immutable {
            return Err(CoreError::ImmutableRecord {
                record_type: kind.to_string(),
                name: fields.name,
            });
        }
        fields.validate(kind)?;

        let record_set = RecordSet::new(zone.id.clone(), kind, fields);
        let mut change_set = ChangeSet::new(zone.id.clone());
        change_set.push(ChangeAction::Create, &record_set);

        let info = self.change_record_sets(&change_set, None).await?;
        Ok((record_set, info))
    }
}

macro_rules! record_constructors {
    ($($name:ident => $kind:ident),* $(,)?) => {
        impl Route53Gateway {
            $(
                #[doc = concat!(
                    "Create a `", stringify!($kind), "` record set; ",
                    "see [`create_record`](Self::create_record)."
                )]
                pub async fn $name(
                    &self,
                    zone: &Zone,
                    fields: RecordFields,
                ) -> CoreResult<(RecordSet, ChangeInfo)> {
                    self.create_record(zone, RecordType::$kind, fields).await
                }
            )*
        }
    };
}

record_constructors! {
    create_a_record => A,
    create_aaaa_record => Aaaa,
    create_cname_record => Cname,
    create_mx_record => Mx,
    create_ns_record => Ns,
    create_ptr_record => Ptr,
    create_spf_record => Spf,
    create_srv_record => Srv,
    create_txt_record => Txt,
}
