//! Route 53 request execution

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, RetryPolicy};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError, Transport};
use crate::types::{HttpMethod, RequestPayload};
use crate::utils::log_sanitizer::{mask_signature, truncate_for_log};
use crate::xml::{API_VERSION, ErrorResponseXml};

use super::Route53Transport;
use super::sign::{amz_date, canonical_query};

impl Route53Transport {
    /// Turn a non-2xx response into a [`ProviderError`].
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // Try to parse a structured error document
        if let Ok(doc) = quick_xml::de::from_str::<ErrorResponseXml>(response_text) {
            if let Some(messages) = doc.messages.filter(|m| !m.items.is_empty()) {
                return Err(ProviderError::InvalidChangeBatch {
                    messages: messages.items,
                });
            }
            if let Some(code) = doc.error.as_ref().and_then(|e| e.code.clone()) {
                let message = doc.error.and_then(|e| e.message).unwrap_or_default();
                return Err(self.map_error(RawApiError::with_code(code, message), ctx));
            }
        }

        // Fall back to a generic error
        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// Change batches are not idempotent: once sent, only throttling is
    /// known to have left them unapplied.
    fn retry_policy_for(method: HttpMethod, path: &str) -> RetryPolicy {
        if method == HttpMethod::Post && path.trim_end_matches('/').ends_with("/rrset") {
            RetryPolicy::ThrottleOnly
        } else {
            RetryPolicy::Transient
        }
    }

    fn request_builder(&self, method: HttpMethod, url: &str) -> reqwest::RequestBuilder {
        match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Delete => self.client.delete(url),
        }
    }
}

#[async_trait]
impl Transport for Route53Transport {
    async fn send(
        &self,
        path: &str,
        payload: RequestPayload,
        method: HttpMethod,
    ) -> Result<String> {
        let ctx = ErrorContext::from_path(path);
        let uri = format!("/{API_VERSION}/{}", path.trim_start_matches('/'));
        let query = canonical_query(payload.query_pairs());
        let body = payload.body().to_string();

        let now = Utc::now();
        let timestamp = amz_date(&now);
        let host = self.config.host().to_string();

        let headers = vec![
            ("Host".to_string(), host),
            ("X-Amz-Date".to_string(), timestamp.clone()),
        ];
        let authorization = self.sign(method.as_str(), &uri, &query, &headers, &body, &now)?;
        log::debug!(
            "[{}] Authorization: {}",
            self.provider_name(),
            mask_signature(&authorization)
        );

        let endpoint = self.config.endpoint.trim_end_matches('/');
        let url = if query.is_empty() {
            format!("{endpoint}{uri}")
        } else {
            format!("{endpoint}{uri}?{query}")
        };

        // reqwest derives the Host header from the URL
        let mut request = self
            .request_builder(method, &url)
            .header("X-Amz-Date", &timestamp)
            .header("Authorization", authorization);

        if matches!(payload, RequestPayload::Body(_)) {
            log::debug!("[{}] Request Body: {}", self.provider_name(), truncate_for_log(&body));
            request = request.header("Content-Type", "text/xml").body(body);
        }

        let policy = Self::retry_policy_for(method, path);
        let response_text = HttpUtils::execute_request_with_retry(
            request,
            method.as_str(),
            &url,
            self.config.max_retries,
            policy,
            |status, text| self.handle_response_error(status, text, ctx.clone()),
        )
        .await
        .inspect_err(|e| {
            if e.is_expected() {
                log::warn!("{e}");
            } else {
                log::error!("{e}");
            }
        })?;

        Ok(response_text)
    }
}
