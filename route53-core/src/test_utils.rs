//! Scripted transport and response fixtures for unit tests

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use route53_provider::{HttpMethod, ProviderError, RequestPayload, Result, Transport};
use tokio::sync::Mutex;

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// One call seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub payload: RequestPayload,
    pub method: HttpMethod,
}

impl RecordedRequest {
    pub fn query(&self, key: &str) -> Option<&str> {
        self.payload
            .query_pairs()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &str {
        self.payload.body()
    }
}

/// Answers requests from a queue and records every call.
///
/// An empty queue answers with a network error.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses<I, S>(bodies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            responses: Mutex::new(bodies.into_iter().map(|b| Ok(b.into())).collect()),
            requests: Mutex::default(),
        })
    }

    pub async fn push_ok(&self, body: impl Into<String>) {
        self.responses.lock().await.push_back(Ok(body.into()));
    }

    pub async fn push_err(&self, error: ProviderError) {
        self.responses.lock().await.push_back(Err(error));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        path: &str,
        payload: RequestPayload,
        method: HttpMethod,
    ) -> Result<String> {
        self.requests.lock().await.push(RecordedRequest {
            path: path.to_string(),
            payload,
            method,
        });
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(ProviderError::NetworkError {
                    detail: format!("no scripted response for {method} {path}"),
                })
            })
    }
}

/// Route 53 response documents.
pub mod fixtures {
    const NS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
    const SUBMITTED_AT: &str = "2017-03-10T01:36:41.958Z";

    fn hosted_zone(id: &str, name: &str) -> String {
        format!(
            "<HostedZone><Id>/hostedzone/{id}</Id><Name>{name}</Name>\
             <CallerReference>ref-{id}</CallerReference>\
             <Config><PrivateZone>false</PrivateZone></Config>\
             <ResourceRecordSetCount>2</ResourceRecordSetCount></HostedZone>"
        )
    }

    fn change_info(id: &str, status: &str) -> String {
        format!(
            "<ChangeInfo><Id>/change/{id}</Id><Status>{status}</Status>\
             <SubmittedAt>{SUBMITTED_AT}</SubmittedAt></ChangeInfo>"
        )
    }

    fn delegation_set(nameservers: &[&str]) -> String {
        let items: String = nameservers
            .iter()
            .map(|ns| format!("<NameServer>{ns}</NameServer>"))
            .collect();
        format!("<DelegationSet><NameServers>{items}</NameServers></DelegationSet>")
    }

    pub fn zone_page(zones: &[(&str, &str)], next_marker: Option<&str>) -> String {
        let items: String = zones.iter().map(|(id, name)| hosted_zone(id, name)).collect();
        let tail = match next_marker {
            Some(m) => format!("<IsTruncated>true</IsTruncated><NextMarker>{m}</NextMarker>"),
            None => "<IsTruncated>false</IsTruncated>".to_string(),
        };
        format!(
            "<ListHostedZonesResponse xmlns=\"{NS}\"><HostedZones>{items}</HostedZones>\
             {tail}<MaxItems>100</MaxItems></ListHostedZonesResponse>"
        )
    }

    pub fn get_zone(id: &str, name: &str, nameservers: &[&str]) -> String {
        format!(
            "<GetHostedZoneResponse xmlns=\"{NS}\">{}{}</GetHostedZoneResponse>",
            hosted_zone(id, name),
            delegation_set(nameservers)
        )
    }

    pub fn create_zone(id: &str, name: &str, change_id: &str, nameservers: &[&str]) -> String {
        format!(
            "<CreateHostedZoneResponse xmlns=\"{NS}\">{}{}{}</CreateHostedZoneResponse>",
            hosted_zone(id, name),
            change_info(change_id, "PENDING"),
            delegation_set(nameservers)
        )
    }

    pub fn delete_zone(change_id: &str) -> String {
        format!(
            "<DeleteHostedZoneResponse xmlns=\"{NS}\">{}</DeleteHostedZoneResponse>",
            change_info(change_id, "PENDING")
        )
    }

    pub fn change_submitted(change_id: &str) -> String {
        format!(
            "<ChangeResourceRecordSetsResponse xmlns=\"{NS}\">{}\
             </ChangeResourceRecordSetsResponse>",
            change_info(change_id, "PENDING")
        )
    }

    pub fn get_change(change_id: &str, status: &str) -> String {
        format!(
            "<GetChangeResponse xmlns=\"{NS}\">{}</GetChangeResponse>",
            change_info(change_id, status)
        )
    }

    pub fn record_xml(name: &str, kind: &str, ttl: u32, values: &[&str]) -> String {
        let records: String = values
            .iter()
            .map(|v| format!("<ResourceRecord><Value>{v}</Value></ResourceRecord>"))
            .collect();
        format!(
            "<ResourceRecordSet><Name>{name}</Name><Type>{kind}</Type><TTL>{ttl}</TTL>\
             <ResourceRecords>{records}</ResourceRecords></ResourceRecordSet>"
        )
    }

    /// `next` is `(NextRecordName, NextRecordType, NextRecordIdentifier)`.
    pub fn record_page(records: &[String], next: Option<(&str, &str, Option<&str>)>) -> String {
        let tail = match next {
            Some((name, kind, identifier)) => {
                let identifier = identifier
                    .map(|id| format!("<NextRecordIdentifier>{id}</NextRecordIdentifier>"))
                    .unwrap_or_default();
                format!(
                    "<IsTruncated>true</IsTruncated><NextRecordName>{name}</NextRecordName>\
                     <NextRecordType>{kind}</NextRecordType>{identifier}"
                )
            }
            None => "<IsTruncated>false</IsTruncated>".to_string(),
        };
        format!(
            "<ListResourceRecordSetsResponse xmlns=\"{NS}\">\
             <ResourceRecordSets>{}</ResourceRecordSets>\
             {tail}<MaxItems>100</MaxItems></ListResourceRecordSetsResponse>",
            records.concat()
        )
    }

    /// The default pair every new zone starts with.
    pub fn default_records(zone: &str) -> Vec<String> {
        vec![
            record_xml(
                zone,
                "NS",
                172_800,
                &["ns-2048.awsdns-64.com.", "ns-2049.awsdns-65.net."],
            ),
            record_xml(
                zone,
                "SOA",
                900,
                &["ns-2048.awsdns-64.com. awsdns-hostmaster.amazon.com. 1 7200 900 1209600 86400"],
            ),
        ]
    }
}
