//! URL normalization.
//!
//! The only normalization applied is scheme defaulting; the rest of the URL
//! is stored exactly as submitted.

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Prepends `https://` unless the URL already starts with `http://` or
/// `https://` (case-insensitive).
///
/// # Examples
///
/// ```
/// use shorty::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com/x"), "https://example.com/x");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(url: &str) -> String {
    if has_prefix(url, HTTP_PREFIX) || has_prefix(url, HTTPS_PREFIX) {
        url.to_string()
    } else {
        format!("{HTTPS_PREFIX}{url}")
    }
}

fn has_prefix(url: &str, prefix: &str) -> bool {
    url.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
