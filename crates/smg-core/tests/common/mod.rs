//! Helpers for reading generated sitemap files back.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// Root element name and every top-level `<loc>` text, in document order.
pub struct SitemapDoc {
    pub root: String,
    pub locs: Vec<String>,
}

/// Parse `path` as XML, panicking if it is not well-formed.
pub fn read_sitemap(path: &Path) -> SitemapDoc {
    let xml = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {}", path.display(), e));
    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut root = None;
    let mut in_loc = false;
    let mut locs = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                in_loc = name == "loc";
                root.get_or_insert(name);
            }
            Ok(Event::End(_)) => in_loc = false,
            Ok(Event::Text(t)) if in_loc => locs.push(t.unescape().unwrap().into_owned()),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("{} is not well-formed: {}", path.display(), e),
        }
    }

    SitemapDoc {
        root: root.expect("document has a root element"),
        locs,
    }
}

/// A page URL containing characters that must be escaped.
pub fn page(n: usize) -> String {
    format!("https://example.com/page/{}?ref=a&b='c'", n)
}
