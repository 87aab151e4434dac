//! Content sources feeding the writer.
//!
//! A source yields [`SitemapItem`]s and declares which sitemap extensions its
//! items use, so the `<urlset>` namespaces can be fixed before the first part
//! file is opened. Where the items come from (a static list, a paginated
//! database cursor) is the source's business.

mod batch;
mod generate;
mod item;
mod static_list;

pub use batch::{BatchSource, DEFAULT_BATCH_SIZE};
pub use generate::{collect_schemas, generate};
pub use item::{ImageItem, SitemapItem};
pub use static_list::StaticSource;

use crate::writer::SchemaSet;

/// Sitemap extensions a source's items may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub images: bool,
    pub alternate_links: bool,
}

impl Capabilities {
    /// Add the namespace declarations these capabilities need.
    pub fn apply(self, mut schemas: SchemaSet) -> SchemaSet {
        if self.images {
            schemas = schemas.with_images();
        }
        if self.alternate_links {
            schemas = schemas.with_alternate_links();
        }
        schemas
    }
}

/// A producer of sitemap items.
pub trait ItemSource {
    /// Label used in logs and error context.
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    /// Items in output order. An `Err` aborts the run.
    fn items(&mut self) -> Box<dyn Iterator<Item = anyhow::Result<SitemapItem>> + '_>;
}
