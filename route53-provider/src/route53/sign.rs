//! AWS Signature Version 4

use std::fmt::Write;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{Route53Transport, SERVICE_NAME};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// `X-Amz-Date` stamp, e.g. `20130728T010001Z`
pub(crate) fn amz_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y%m%dT%H%M%SZ").to_string()
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| ProviderError::InvalidParameter {
        param: "secret_access_key".to_string(),
        detail: e.to_string(),
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sorts and RFC 3986-encodes query pairs. The same string is used for the
/// request URL and the canonical request.
pub(crate) fn canonical_query(pairs: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| {
            (
                urlencoding::encode(k).into_owned(),
                urlencoding::encode(v).into_owned(),
            )
        })
        .collect();
    encoded.sort_unstable();
    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

impl Route53Transport {
    /// Build the `Authorization` header value for one request.
    /// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
    pub(crate) fn sign(
        &self,
        method: &str,
        uri: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        timestamp: &DateTime<Utc>,
    ) -> Result<String> {
        // 1. Canonical headers, lowercase and sorted
        let mut sorted_headers: Vec<_> = headers.iter().collect();
        sorted_headers.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));

        let canonical_headers: String =
            sorted_headers
                .iter()
                .fold(String::new(), |mut acc, (k, v)| {
                    let _ = writeln!(acc, "{}:{}", k.to_lowercase(), v.trim());
                    acc
                });

        let signed_headers: String = sorted_headers
            .iter()
            .map(|(k, _)| k.to_lowercase())
            .collect::<Vec<_>>()
            .join(";");

        // 2. Canonical request
        let hashed_payload = hex::encode(Sha256::digest(payload.as_bytes()));
        let canonical_request = format!(
            "{method}\n{uri}\n{query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}"
        );

        log::debug!(
            "[route53] CanonicalRequest:\n{}",
            truncate_for_log(&canonical_request)
        );

        // 3. String to sign
        let date = timestamp.format("%Y%m%d").to_string();
        let credential_scope = format!(
            "{date}/{}/{SERVICE_NAME}/aws4_request",
            self.config.region
        );
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!(
            "{ALGORITHM}\n{}\n{credential_scope}\n{hashed_canonical_request}",
            amz_date(timestamp)
        );

        log::debug!("[route53] StringToSign:\n{string_to_sign}");

        // 4. Derived signing key
        let secret = format!("AWS4{}", self.credentials.secret_access_key);
        let k_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
        let k_region = hmac_sha256(&k_date, self.config.region.as_bytes())?;
        let k_service = hmac_sha256(&k_region, SERVICE_NAME.as_bytes())?;
        let k_signing = hmac_sha256(&k_service, b"aws4_request")?;

        let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes())?);

        Ok(format!(
            "{ALGORITHM} Credential={}/{credential_scope}, \
             SignedHeaders={signed_headers}, Signature={signature}",
            self.credentials.access_key_id
        ))
    }
}
