//! HTML escaping helpers.

use std::fmt;

/// Displays a string with HTML special characters escaped.
///
/// Safe for both element text and double- or single-quoted attribute values.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// Whether a URL may be emitted as a link target.
///
/// Only absolute `http` and `https` URLs qualify, which keeps `javascript:`
/// and `data:` payloads from upstream out of `href` attributes.
pub fn is_linkable_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_len = match url.find(':') {
        Some(n) => n,
        None => return false,
    };
    let scheme = &url[..scheme_len];
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        && url[scheme_len..].starts_with("://")
        && url.len() > scheme_len + 3
}
