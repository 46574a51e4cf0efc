//! Log sanitization utilities
//!
//! Keeps API tokens and oversized response bodies (zone dumps can be large)
//! out of debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters left visible by [`mask_secret`].
const VISIBLE_SECRET_CHARS: usize = 4;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged. Longer strings are cut at
/// the last character boundary before the limit and suffixed with the total
/// length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask a secret, keeping only a short prefix.
///
/// `"abcdef123456"` becomes `"abcd********"`.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= VISIBLE_SECRET_CHARS {
        return "*".repeat(total);
    }
    let prefix: String = secret.chars().take(VISIBLE_SECRET_CHARS).collect();
    format!("{prefix}{}", "*".repeat(total - VISIBLE_SECRET_CHARS))
}
