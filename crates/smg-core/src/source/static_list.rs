//! A finite, in-memory list of items.

use anyhow::{Context, Result};
use std::path::Path;

use super::{Capabilities, ItemSource, SitemapItem};

pub struct StaticSource {
    name: String,
    items: Vec<SitemapItem>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, items: Vec<SitemapItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Load a JSON array of items. The source is named after the file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read items: {}", path.display()))?;
        let items: Vec<SitemapItem> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse items: {}", path.display()))?;
        Ok(Self::new(path.display().to_string(), items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            images: self.items.iter().any(|i| !i.images.is_empty()),
            alternate_links: self.items.iter().any(|i| !i.alternate_links.is_empty()),
        }
    }

    fn items(&mut self) -> Box<dyn Iterator<Item = Result<SitemapItem>> + '_> {
        Box::new(self.items.iter().cloned().map(Ok))
    }
}
