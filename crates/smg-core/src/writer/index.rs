//! Sitemap-index document listing part files.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use super::schema::SITEMAP_NS;
use crate::entry::{format_w3c, prepare_url};

/// Renders the `<sitemapindex>` document for `parts` (in creation order).
///
/// Every `<lastmod>` is `generated_at`; part files don't track their own
/// completion time. `base_url` is expected without a trailing slash.
pub fn render_index<Tz: TimeZone>(
    base_url: &str,
    parts: &[String],
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: Display,
{
    let lastmod = format_w3c(generated_at);
    let mut lines = Vec::with_capacity(parts.len() * 4 + 3);
    lines.push("<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string());
    lines.push(format!("<sitemapindex xmlns=\"{}\">", SITEMAP_NS));

    for part in parts {
        let loc = format!("{}/{}", base_url, part);
        lines.push("\t<sitemap>".to_string());
        lines.push(format!("\t\t<loc>{}</loc>", prepare_url(&loc)));
        lines.push(format!("\t\t<lastmod>{}</lastmod>", lastmod));
        lines.push("\t</sitemap>".to_string());
    }

    lines.push("</sitemapindex>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn index_layout() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        let parts = vec!["sitemap1.xml".to_string(), "sitemap2.xml".to_string()];
        let xml = render_index("https://example.com", &parts, &at);

        let expected = [
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
            "\t<sitemap>",
            "\t\t<loc>https://example.com/sitemap1.xml</loc>",
            "\t\t<lastmod>2025-03-04T05:06:07+00:00</lastmod>",
            "\t</sitemap>",
            "\t<sitemap>",
            "\t\t<loc>https://example.com/sitemap2.xml</loc>",
            "\t\t<lastmod>2025-03-04T05:06:07+00:00</lastmod>",
            "\t</sitemap>",
            "</sitemapindex>",
        ]
        .join("\n");
        assert_eq!(xml, expected);
    }

    #[test]
    fn empty_base_url_gives_root_relative_locs() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let xml = render_index("", &["sitemap1.xml".to_string()], &at);
        assert!(xml.contains("<loc>/sitemap1.xml</loc>"));
    }
}
