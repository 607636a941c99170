//! Syntactic checks for mapping keys and target URLs.
//!
//! Both checks are pure and make no network calls. The URL check is a shape
//! test only: it rejects obviously malformed strings and accepts plenty of
//! well-shaped strings that do not resolve.

use regex::Regex;
use std::sync::LazyLock;

/// URL shape accepted by the management API.
///
/// Optional `http(s)://` scheme, then a dotted host (the final label is 2-6
/// letters or dots) or a run of digits and dots, then any number of segments
/// that each start with one of `/ : ? = & #` followed by alphanumerics, dots or
/// hyphens, then an optional trailing `/` or `?`. Matching is ASCII
/// case-insensitive and anchored to the whole value.
///
/// `^` and `$` anchor the whole string, not each line. A value with a line
/// break never matches, even when one of its lines would, so every stored
/// value is a single line that is valid as a `Location` header.
static URL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^(https?://)?([0-9a-z.-]+\.[a-z.]{2,6}|[0-9.]+)([/:?=&#][0-9a-z.-]+)*[/?]?$")
        .unwrap()
});

/// Returns true if `key` is a non-empty run of ASCII letters and digits.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_key_syntax("abc123"));
/// assert!(!validate_key_syntax("my-link"));
/// assert!(!validate_key_syntax(""));
/// ```
pub fn validate_key_syntax(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if `value` has the URL shape described on [`URL_SHAPE_REGEX`].
pub fn validate_url_syntax(value: &str) -> bool {
    URL_SHAPE_REGEX.is_match(value)
}
