//! Log sanitization utilities
//!
//! Keeps record values (DKIM keys, SPF strings, ...) and request signatures
//! from being fully exposed in debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Masks the `Signature=` part of an `Authorization` header value.
///
/// Everything before the signature (algorithm, credential scope, signed
/// headers) is kept so a failing request can still be diagnosed.
pub fn mask_signature(authorization: &str) -> String {
    match authorization.find("Signature=") {
        Some(pos) => format!("{}Signature=***", &authorization[..pos]),
        None => authorization.to_string(),
    }
}
