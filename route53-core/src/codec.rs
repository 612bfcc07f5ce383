//! Mapping between wire documents and domain types

use std::sync::Arc;

use route53_provider::ProviderError;
use route53_provider::xml::{
    AliasTargetXml, ChangeInfoXml, ChangeResourceRecordSetsRequest, ChangeXml, HostedZoneXml,
    ListHostedZonesResponse, ListResourceRecordSetsResponse, ResourceRecordSetXml,
    ResourceRecordsXml, from_xml, to_xml,
};

use crate::change_set::ChangeSet;
use crate::error::CoreResult;
use crate::pagination::{Continuation, Page, PageDecoder};
use crate::types::{
    AliasTarget, ChangeInfo, ChangeStatus, RecordData, RecordFields, RecordSet, RecordType, Zone,
};

const ZONE_ID_PREFIX: &str = "/hostedzone/";
const CHANGE_ID_PREFIX: &str = "/change/";

pub(crate) fn strip_zone_id_prefix(id: &str) -> &str {
    id.strip_prefix(ZONE_ID_PREFIX).unwrap_or(id)
}

pub(crate) fn strip_change_id_prefix(id: &str) -> &str {
    id.strip_prefix(CHANGE_ID_PREFIX).unwrap_or(id)
}

// ============ Zones ============

/// Nameservers are left unset; listings never carry them.
pub(crate) fn zone_from_xml(xml: HostedZoneXml) -> Zone {
    let mut zone = Zone::new(
        strip_zone_id_prefix(&xml.id),
        xml.name,
        xml.caller_reference,
    );
    zone.record_set_count = xml.resource_record_set_count;
    zone.comment = xml
        .config
        .and_then(|c| c.comment)
        .filter(|c| !c.is_empty());
    zone
}

pub(crate) fn change_info_from_xml(xml: ChangeInfoXml) -> ChangeInfo {
    ChangeInfo {
        id: strip_change_id_prefix(&xml.id).to_string(),
        status: ChangeStatus::from(xml.status.as_str()),
        submitted_at: xml.submitted_at,
        comment: xml.comment,
    }
}

pub(crate) fn zone_page() -> PageDecoder<Zone> {
    Arc::new(|body: &str| {
        let doc: ListHostedZonesResponse = from_xml(body)?;
        Ok(Page {
            items: doc.hosted_zones.items.into_iter().map(zone_from_xml).collect(),
            continuation: Continuation {
                marker: doc.next_marker,
                record_type: None,
                identifier: None,
            },
        })
    })
}

// ============ Record sets ============

pub(crate) fn record_set_from_xml(
    zone_id: &str,
    xml: ResourceRecordSetXml,
) -> CoreResult<RecordSet> {
    let kind: RecordType = xml.record_type.parse()?;

    let data = match xml.alias_target {
        Some(alias) => RecordData::Alias(AliasTarget {
            hosted_zone_id: alias.hosted_zone_id,
            dns_name: alias.dns_name,
            evaluate_target_health: alias.evaluate_target_health,
        }),
        None => {
            let values = xml
                .resource_records
                .map(|r| r.records.into_iter().map(|v| v.value).collect())
                .unwrap_or_default();
            let ttl = xml.ttl.ok_or_else(|| ProviderError::ParseError {
                detail: format!("{} {} record set has neither TTL nor AliasTarget", xml.name, kind),
            })?;
            RecordData::Values { ttl, values }
        }
    };

    let fields = RecordFields {
        name: xml.name,
        data,
        weight: xml.weight,
        region: xml.region,
        set_identifier: xml.set_identifier,
    };
    Ok(RecordSet::new(zone_id, kind, fields))
}

pub(crate) fn record_set_to_xml(kind: RecordType, fields: &RecordFields) -> ResourceRecordSetXml {
    let mut xml = ResourceRecordSetXml {
        name: fields.name.clone(),
        record_type: kind.as_str().to_string(),
        set_identifier: fields.set_identifier.clone(),
        weight: fields.weight,
        region: fields.region.clone(),
        ..ResourceRecordSetXml::default()
    };
    match &fields.data {
        RecordData::Values { ttl, values } => {
            xml.ttl = Some(*ttl);
            xml.resource_records = Some(ResourceRecordsXml::from_values(values));
        }
        RecordData::Alias(target) => {
            xml.alias_target = Some(AliasTargetXml {
                hosted_zone_id: target.hosted_zone_id.clone(),
                dns_name: target.dns_name.clone(),
                evaluate_target_health: target.evaluate_target_health,
            });
        }
    }
    xml
}

/// `ChangeResourceRecordSetsRequest` body, deletions first.
pub(crate) fn change_batch_body(
    change_set: &ChangeSet,
    comment: Option<&str>,
) -> CoreResult<String> {
    let changes = change_set
        .changes()
        .map(|change| ChangeXml {
            action: change.action.as_str().to_string(),
            resource_record_set: record_set_to_xml(change.kind, &change.fields),
        })
        .collect();
    Ok(to_xml(&ChangeResourceRecordSetsRequest::new(changes, comment))?)
}

pub(crate) fn record_set_page(zone_id: String) -> PageDecoder<RecordSet> {
    Arc::new(move |body: &str| {
        let doc: ListResourceRecordSetsResponse = from_xml(body)?;
        let items = doc
            .resource_record_sets
            .items
            .into_iter()
            .map(|xml| record_set_from_xml(&zone_id, xml))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Page {
            items,
            continuation: Continuation {
                marker: doc.next_record_name,
                record_type: doc.next_record_type,
                identifier: doc.next_record_identifier,
            },
        })
    })
}
