//! Generic HTTP execution helpers
//!
//! The transport builds and signs a `RequestBuilder` itself; these helpers
//! own what happens after that: sending, logging, reading the body, and
//! retrying transient failures.

use reqwest::RequestBuilder;
use std::time::Duration;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// HTTP 429 becomes [`ProviderError::RateLimited`] and HTTP 502-504 become
    /// [`ProviderError::NetworkError`]; every other status is handed back to
    /// the caller for interpretation.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[route53] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[route53] Response Status: {status_code}");

        // Read Retry-After before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[route53] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[route53] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[route53] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// One attempt: send, then let `check` judge the status and body.
    async fn execute_checked<F>(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        check: &F,
    ) -> Result<String, ProviderError>
    where
        F: Fn(u16, &str) -> Result<(), ProviderError>,
    {
        let (status, text) = Self::execute_request(request_builder, method_name, url).await?;
        check(status, &text)?;
        Ok(text)
    }

    /// Performs an HTTP request, retrying transient failures.
    ///
    /// `check` turns a received status and body into an API error; it runs
    /// inside every attempt so that throttling reported in an error document
    /// is retried like HTTP 429.
    ///
    /// # Retry strategy
    /// - [`RetryPolicy`] decides which errors are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds), or the
    ///   server's `Retry-After` (maximum 30 seconds) when throttled
    /// - API errors (missing zone, rejected change batch, ...) are never retried
    pub async fn execute_request_with_retry<F>(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
        policy: RetryPolicy,
        check: F,
    ) -> Result<String, ProviderError>
    where
        F: Fn(u16, &str) -> Result<(), ProviderError>,
    {
        if max_retries == 0 {
            return Self::execute_checked(request_builder, method_name, url, &check).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[route53] Cannot clone request, disabling retry");
                return Self::execute_checked(request_builder, method_name, url, &check).await;
            };

            match Self::execute_checked(req, method_name, url, &check).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < max_retries && policy.allows(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[route53] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Which failures a request may be retried after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Any transient failure: network errors, timeouts and throttling.
    Transient,
    /// Throttling only. For non-idempotent requests, where a timeout or a
    /// gateway error may hide a request the server already applied.
    ThrottleOnly,
}

impl RetryPolicy {
    pub fn allows(self, error: &ProviderError) -> bool {
        match self {
            Self::Transient => is_retryable(error),
            Self::ThrottleOnly => matches!(error, ProviderError::RateLimited { .. }),
        }
    }
}

/// Whether the error is a transient transport failure
fn is_retryable(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::NetworkError { .. }
            | ProviderError::Timeout { .. }
            | ProviderError::RateLimited { .. }
    )
}

/// Delay before the next attempt
///
/// A throttled response's `retry_after` wins (capped at 30s); otherwise
/// exponential backoff.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // keep 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_transport_failures() {
        assert!(is_retryable(&ProviderError::NetworkError {
            detail: "err".into(),
        }));
        assert!(is_retryable(&ProviderError::Timeout {
            detail: "err".into(),
        }));
        assert!(is_retryable(&ProviderError::RateLimited {
            retry_after: None,
            raw_message: None,
        }));
    }

    #[test]
    fn api_errors_are_not_retried() {
        assert!(!is_retryable(&ProviderError::InvalidCredentials {
            raw_message: None,
        }));
        assert!(!is_retryable(&ProviderError::ZoneNotFound {
            zone_id: "Z1".into(),
            raw_message: None,
        }));
        assert!(!is_retryable(&ProviderError::InvalidChangeBatch {
            messages: vec!["already exists".into()],
        }));
        assert!(!is_retryable(&ProviderError::ParseError {
            detail: "err".into(),
        }));
    }

    #[test]
    fn throttle_only_skips_ambiguous_failures() {
        let policy = RetryPolicy::ThrottleOnly;
        assert!(policy.allows(&ProviderError::RateLimited {
            retry_after: None,
            raw_message: Some("Rate exceeded".into()),
        }));
        assert!(!policy.allows(&ProviderError::Timeout {
            detail: "err".into(),
        }));
        assert!(!policy.allows(&ProviderError::NetworkError {
            detail: "HTTP 503".into(),
        }));
    }

    #[test]
    fn transient_policy_matches_retryable() {
        let policy = RetryPolicy::Transient;
        assert!(policy.allows(&ProviderError::Timeout {
            detail: "err".into(),
        }));
        assert!(!policy.allows(&ProviderError::ZoneNotFound {
            zone_id: "Z1".into(),
            raw_message: None,
        }));
    }

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped to 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_wins_over_backoff() {
        let throttled = ProviderError::RateLimited {
            retry_after: Some(120),
            raw_message: None,
        };
        assert_eq!(retry_delay(&throttled, 0), Duration::from_secs(30));

        let throttled = ProviderError::RateLimited {
            retry_after: Some(2),
            raw_message: None,
        };
        assert_eq!(retry_delay(&throttled, 5), Duration::from_secs(2));
    }
}
