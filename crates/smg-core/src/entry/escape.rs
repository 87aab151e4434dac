//! Escaping for URL-bearing text nodes and attributes.

use std::borrow::Cow;

/// Escapes the five XML special characters in a URL placed in `<loc>`,
/// `<image:loc>` or an `href` attribute.
///
/// `&` is replaced first so entities produced by the later replacements are
/// never encoded a second time.
pub fn prepare_url(url: &str) -> Cow<'_, str> {
    if !url.contains(['&', '\'', '"', '>', '<']) {
        return Cow::Borrowed(url);
    }

    Cow::Owned(
        url.replace('&', "&amp;")
            .replace('\'', "&apos;")
            .replace('"', "&quot;")
            .replace('>', "&gt;")
            .replace('<', "&lt;"),
    )
}
