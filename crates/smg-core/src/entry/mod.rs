//! A single `<url>` record and its XML serialization.
//!
//! Output layout is one element per line, children indented with a tab:
//!
//! ```xml
//! <url>
//! 	<loc>https://example.com/a</loc>
//! 	<lastmod>2024-06-15T14:30:45+00:00</lastmod>
//! 	<image:image>
//! 		<image:loc>https://example.com/a.png</image:loc>
//! 	</image:image>
//! 	<xhtml:link rel="alternate" hreflang="de" href="https://example.com/de/a" />
//! </url>
//! ```

mod constants;
mod escape;
mod lastmod;

pub use constants::{changefreq, priority};
pub use escape::prepare_url;
pub use lastmod::{format_w3c, parse_datetime, LastModified};

use crate::error::Result;

/// One image attached to a URL (Google image extension).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub loc: String,
    pub geo_location: Option<String>,
    pub caption: Option<String>,
    pub title: Option<String>,
    pub license: Option<String>,
}

impl Image {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            ..Self::default()
        }
    }
}

/// A `<url>` entry. Built once, serialized once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlEntry {
    loc: String,
    lastmod: Option<LastModified>,
    changefreq: Option<String>,
    priority: Option<String>,
    images: Vec<Image>,
    /// `(hreflang, href)` in insertion order; keys are unique.
    alternate_links: Vec<(String, String)>,
}

impl UrlEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            ..Self::default()
        }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<LastModified>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.add_image(image);
        self
    }

    pub fn with_alternate_link(mut self, hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        self.add_alternate_link(hreflang, href);
        self
    }

    /// Appends an image. Images with an empty `loc` are dropped; returns whether it was kept.
    pub fn add_image(&mut self, image: Image) -> bool {
        if image.loc.is_empty() {
            return false;
        }
        self.images.push(image);
        true
    }

    /// Sets the alternate link for `hreflang`. A repeated language replaces the
    /// earlier href but keeps its original position.
    pub fn add_alternate_link(&mut self, hreflang: impl Into<String>, href: impl Into<String>) {
        let hreflang = hreflang.into();
        let href = href.into();
        match self.alternate_links.iter_mut().find(|(lang, _)| *lang == hreflang) {
            Some(slot) => slot.1 = href,
            None => self.alternate_links.push((hreflang, href)),
        }
    }

    pub fn loc(&self) -> &str {
        &self.loc
    }

    pub fn lastmod(&self) -> Option<&LastModified> {
        self.lastmod.as_ref()
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn alternate_links(&self) -> &[(String, String)] {
        &self.alternate_links
    }

    /// Renders the `<url>` block without a trailing newline.
    ///
    /// Returns an empty string when `loc` is empty (the entry must not be emitted).
    /// An unparseable `lastmod` is returned as `SitemapError::Parse`.
    /// Only URL-bearing values are escaped; changefreq, priority and image
    /// caption/geo_location/title/license are written verbatim.
    pub fn serialize(&self) -> Result<String> {
        if self.loc.is_empty() {
            return Ok(String::new());
        }

        let mut xml = String::with_capacity(128 + self.images.len() * 96);
        xml.push_str("<url>\n\t<loc>");
        xml.push_str(&prepare_url(&self.loc));
        xml.push_str("</loc>");

        if let Some(lastmod) = &self.lastmod {
            push_element(&mut xml, 1, "lastmod", &lastmod.to_w3c()?);
        }
        if let Some(changefreq) = &self.changefreq {
            push_element(&mut xml, 1, "changefreq", changefreq);
        }
        if let Some(priority) = &self.priority {
            push_element(&mut xml, 1, "priority", priority);
        }

        for image in &self.images {
            xml.push_str("\n\t<image:image>");
            push_element(&mut xml, 2, "image:loc", &prepare_url(&image.loc));
            if let Some(caption) = &image.caption {
                push_element(&mut xml, 2, "image:caption", caption);
            }
            if let Some(geo) = &image.geo_location {
                push_element(&mut xml, 2, "image:geo_location", geo);
            }
            if let Some(title) = &image.title {
                push_element(&mut xml, 2, "image:title", title);
            }
            if let Some(license) = &image.license {
                push_element(&mut xml, 2, "image:license", license);
            }
            xml.push_str("\n\t</image:image>");
        }

        for (hreflang, href) in &self.alternate_links {
            xml.push_str("\n\t<xhtml:link rel=\"alternate\" hreflang=\"");
            xml.push_str(hreflang);
            xml.push_str("\" href=\"");
            xml.push_str(&prepare_url(href));
            xml.push_str("\" />");
        }

        xml.push_str("\n</url>");
        Ok(xml)
    }
}

fn push_element(xml: &mut String, depth: usize, tag: &str, text: &str) {
    xml.push('\n');
    for _ in 0..depth {
        xml.push('\t');
    }
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(text);
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
}
