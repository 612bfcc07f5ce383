//! Pagination engine
//!
//! Turns a paginated listing endpoint into one lazy stream of items. Each
//! page is requested only when the consumer pulls past the end of the
//! previous one; dropping the stream stops the walk.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use route53_provider::{HttpMethod, RequestPayload, Transport};

use crate::error::{CoreError, CoreResult};

/// Resume position reported by one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Continuation {
    /// Primary marker (`NextMarker`, `NextRecordName`). Absent on the last page.
    pub marker: Option<String>,
    /// `NextRecordType`, record listings only.
    pub record_type: Option<String>,
    /// `NextRecordIdentifier`, record listings only.
    pub identifier: Option<String>,
}

/// One decoded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub continuation: Continuation,
}

/// Decodes a raw response body into a page.
pub type PageDecoder<T> = Arc<dyn Fn(&str) -> CoreResult<Page<T>> + Send + Sync>;

/// Where each continuation field goes in the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeKeys {
    /// Response field name of the primary marker, for error reporting.
    pub marker_field: &'static str,
    /// Query parameter fed by the primary marker.
    pub marker_param: &'static str,
    /// `(response field, query parameter)` of the required record-type marker.
    pub record_type: Option<(&'static str, &'static str)>,
    /// Query parameter fed by the optional set identifier marker.
    pub identifier_param: Option<&'static str>,
}

impl ResumeKeys {
    /// `ListHostedZones`: `NextMarker` -> `marker`.
    pub const ZONES: Self = Self {
        marker_field: "NextMarker",
        marker_param: "marker",
        record_type: None,
        identifier_param: None,
    };

    /// `ListResourceRecordSets`: `NextRecordName` -> `name`,
    /// `NextRecordType` -> `type`, `NextRecordIdentifier` -> `identifier`.
    ///
    /// A name alone under-constrains the resume point (one name hosts many
    /// types), so a page with a name but no type is an error rather than a
    /// reason to re-request the same page.
    pub const RECORD_SETS: Self = Self {
        marker_field: "NextRecordName",
        marker_param: "name",
        record_type: Some(("NextRecordType", "type")),
        identifier_param: Some("identifier"),
    };
}

/// Request state for the next page.
struct PageFetch<T> {
    transport: Arc<dyn Transport>,
    path: String,
    params: BTreeMap<String, String>,
    keys: ResumeKeys,
    decoder: PageDecoder<T>,
    page_number: usize,
}

enum Cursor<T> {
    Pending(PageFetch<T>),
    /// Raised on the pull after the current page's items.
    Failed(CoreError),
    Exhausted,
}

impl<T> PageFetch<T> {
    async fn fetch(self) -> CoreResult<(Vec<T>, Cursor<T>)> {
        let pairs: Vec<(String, String)> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        log::debug!(
            "[route53] Fetching page {} of {} ({pairs:?})",
            self.page_number + 1,
            self.path
        );

        let body = self
            .transport
            .send(&self.path, RequestPayload::Query(pairs), HttpMethod::Get)
            .await?;
        let page = (self.decoder)(&body)?;

        log::debug!(
            "[route53] Page {} of {}: {} item(s), continuation {:?}",
            self.page_number + 1,
            self.path,
            page.items.len(),
            page.continuation
        );

        Ok((page.items, self.advance(page.continuation)))
    }

    fn advance(mut self, continuation: Continuation) -> Cursor<T> {
        let Some(marker) = continuation.marker else {
            return Cursor::Exhausted;
        };
        self.params.insert(self.keys.marker_param.to_string(), marker);

        if let Some((field, param)) = self.keys.record_type {
            let Some(record_type) = continuation.record_type else {
                log::error!(
                    "[route53] {} page carries {} without {field}",
                    self.path,
                    self.keys.marker_field
                );
                return Cursor::Failed(CoreError::MissingContinuationField {
                    present: self.keys.marker_field,
                    missing: field,
                });
            };
            self.params.insert(param.to_string(), record_type);
        }

        if let Some(param) = self.keys.identifier_param {
            match continuation.identifier {
                Some(identifier) => {
                    self.params.insert(param.to_string(), identifier);
                }
                None => {
                    self.params.remove(param);
                }
            }
        }

        self.page_number += 1;
        Cursor::Pending(self)
    }
}

/// Walks `path` page by page, starting from `params`.
///
/// Items come out in provider order. An error ends the stream at the point
/// where the failing page was due; items already yielded stay valid.
pub fn paginate<T>(
    transport: Arc<dyn Transport>,
    path: impl Into<String>,
    params: BTreeMap<String, String>,
    keys: ResumeKeys,
    decoder: PageDecoder<T>,
) -> BoxStream<'static, CoreResult<T>>
where
    T: Send + 'static,
{
    let first = PageFetch {
        transport,
        path: path.into(),
        params,
        keys,
        decoder,
        page_number: 0,
    };

    stream::try_unfold(Cursor::Pending(first), |cursor| async move {
        match cursor {
            Cursor::Pending(fetch) => fetch.fetch().await.map(Some),
            Cursor::Failed(e) => Err(e),
            Cursor::Exhausted => Ok(None),
        }
    })
    .map_ok(|items: Vec<T>| stream::iter(items.into_iter().map(Ok::<T, CoreError>)))
    .try_flatten()
    .boxed()
}
