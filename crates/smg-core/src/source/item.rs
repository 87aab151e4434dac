//! Content records handed over by item sources.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::entry::{Image, LastModified, UrlEntry};

/// One content record. Deserializes from the JSON shape
/// `{"loc": ..., "lastmod": ..., "changefreq": ..., "priority": ..., "images": [...], "alternateLinks": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SitemapItem {
    pub loc: Option<String>,
    pub lastmod: Option<LastModified>,
    pub changefreq: Option<String>,
    #[serde(deserialize_with = "priority_text")]
    pub priority: Option<String>,
    pub images: Vec<ImageItem>,
    /// `(hreflang, href)` pairs in document order.
    #[serde(deserialize_with = "ordered_pairs")]
    pub alternate_links: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageItem {
    pub loc: Option<String>,
    #[serde(alias = "geo_location")]
    pub geo_location: Option<String>,
    pub caption: Option<String>,
    pub title: Option<String>,
    pub license: Option<String>,
}

impl From<ImageItem> for Image {
    fn from(item: ImageItem) -> Self {
        Image {
            loc: item.loc.unwrap_or_default(),
            geo_location: item.geo_location,
            caption: item.caption,
            title: item.title,
            license: item.license,
        }
    }
}

impl SitemapItem {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: Some(loc.into()),
            ..Self::default()
        }
    }

    pub fn has_loc(&self) -> bool {
        self.loc.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Builds the `<url>` entry. `None` when the item has no location; images
    /// without a location are dropped with a warning.
    pub fn into_url_entry(self) -> Option<UrlEntry> {
        if !self.has_loc() {
            return None;
        }
        let mut entry = UrlEntry::new(self.loc.unwrap_or_default());

        if let Some(lastmod) = self.lastmod {
            entry = entry.with_lastmod(lastmod);
        }
        if let Some(changefreq) = self.changefreq {
            entry = entry.with_changefreq(changefreq);
        }
        if let Some(priority) = self.priority {
            entry = entry.with_priority(priority);
        }
        for image in self.images {
            if !entry.add_image(image.into()) {
                tracing::warn!(loc = entry.loc(), "dropping image without loc");
            }
        }
        for (hreflang, href) in self.alternate_links {
            entry.add_alternate_link(hreflang, href);
        }

        Some(entry)
    }
}

/// Priority may be written as `"0.8"` or `0.8`. Numbers keep their JSON spelling.
fn priority_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// A JSON object of strings, kept in document order.
fn ordered_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of language tag to URL")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut pairs: Vec<(String, String)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, String>()? {
                match pairs.iter_mut().find(|(k, _)| *k == key) {
                    Some(slot) => slot.1 = value,
                    None => pairs.push((key, value)),
                }
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor)
}
