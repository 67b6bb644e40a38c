//! Public short URL construction.

use axum::http::{HeaderMap, header};

/// Header set by TLS-terminating proxies.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Host used when the request carries no `Host` header.
const FALLBACK_HOST: &str = "localhost";

/// Builds the public URL for `code`.
///
/// With a configured `base_url` the result is `<base_url>/<code>`. Otherwise
/// the scheme comes from `X-Forwarded-Proto` (`https` if it says so, `http`
/// otherwise) and the authority is the `Host` header, port included.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(build_short_url(&headers, None, "abc123"), "http://sho.rt:8080/abc123");
/// ```
pub fn build_short_url(headers: &HeaderMap, base_url: Option<&str>, code: &str) -> String {
    if let Some(base) = base_url {
        return format!("{}/{}", base.trim_end_matches('/'), code);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or(FALLBACK_HOST);

    let scheme = if headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
    {
        "https"
    } else {
        "http"
    };

    format!("{scheme}://{host}/{code}")
}
