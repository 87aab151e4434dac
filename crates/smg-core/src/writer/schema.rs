//! Namespace declarations placed on `<urlset>`.

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Ordered, de-duplicated `xmlns[:prefix]="..."` attributes. Always starts
/// with the sitemap protocol namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSet {
    decls: Vec<String>,
}

impl Default for SchemaSet {
    fn default() -> Self {
        Self {
            decls: vec![format!("xmlns=\"{}\"", SITEMAP_NS)],
        }
    }
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the Google image extension (`xmlns:image`).
    pub fn with_images(mut self) -> Self {
        self.push(format!("xmlns:image=\"{}\"", IMAGE_NS));
        self
    }

    /// Declare the XHTML namespace used by hreflang alternates (`xmlns:xhtml`).
    pub fn with_alternate_links(mut self) -> Self {
        self.push(format!("xmlns:xhtml=\"{}\"", XHTML_NS));
        self
    }

    /// Add an arbitrary declaration; duplicates are ignored.
    pub fn push(&mut self, decl: impl Into<String>) {
        let decl = decl.into();
        if !self.decls.contains(&decl) {
            self.decls.push(decl);
        }
    }

    pub fn attributes(&self) -> &[String] {
        &self.decls
    }

    /// XML prolog plus the `<urlset ...>` opening tag, one declaration per line.
    pub(crate) fn urlset_header(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset {}>\n",
            self.decls.join("\n\t")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_protocol_only() {
        assert_eq!(
            SchemaSet::new().urlset_header(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n"
        );
    }

    #[test]
    fn extensions_one_per_line() {
        let header = SchemaSet::new()
            .with_images()
            .with_alternate_links()
            .urlset_header();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\""
        );
        assert_eq!(
            lines[2],
            "\txmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\""
        );
        assert_eq!(lines[3], "\txmlns:xhtml=\"http://www.w3.org/1999/xhtml\">");
    }

    #[test]
    fn duplicates_are_ignored() {
        let set = SchemaSet::new().with_images().with_images();
        assert_eq!(set.attributes().len(), 2);
    }
}
