//! `Location` header construction for stored URLs.

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;

/// Builds a `Location` header value from a stored URL.
///
/// Stored URLs are not validated, so they may contain bytes a header cannot
/// carry. CR and LF become a space; any other control byte (below `0x20`
/// except tab, or `0x7F`) is percent-encoded.
///
/// # Examples
///
/// ```
/// use shorty::utils::location::location_header;
///
/// let value = location_header("https://example.com/a\nb").unwrap();
/// assert_eq!(value, "https://example.com/a b");
/// ```
pub fn location_header(url: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    HeaderValue::from_str(&sanitize(url))
}

fn sanitize(url: &str) -> String {
    let mut out = String::with_capacity(url.len());

    for c in url.chars() {
        match c {
            '\r' | '\n' => out.push(' '),
            '\t' => out.push(c),
            c if c.is_ascii_control() => out.push_str(&format!("%{:02X}", c as u8)),
            c => out.push(c),
        }
    }

    out
}
