//! Paginated cursor over an external store.

use anyhow::Result;

use super::{Capabilities, ItemSource, SitemapItem};

/// Items fetched per page unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Pulls items page by page through `fetch(offset, limit)`. Iteration ends
/// after the first page shorter than `limit`.
pub struct BatchSource<F> {
    name: String,
    batch_size: usize,
    capabilities: Capabilities,
    fetch: F,
}

impl<F> BatchSource<F>
where
    F: FnMut(usize, usize) -> Result<Vec<SitemapItem>>,
{
    pub fn new(name: impl Into<String>, capabilities: Capabilities, fetch: F) -> Self {
        Self {
            name: name.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            capabilities,
            fetch,
        }
    }

    /// Zero is treated as 1.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl<F> ItemSource for BatchSource<F>
where
    F: FnMut(usize, usize) -> Result<Vec<SitemapItem>>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn items(&mut self) -> Box<dyn Iterator<Item = Result<SitemapItem>> + '_> {
        Box::new(Pages {
            fetch: &mut self.fetch,
            limit: self.batch_size,
            offset: 0,
            page: Vec::new().into_iter(),
            done: false,
        })
    }
}

struct Pages<'a, F> {
    fetch: &'a mut F,
    limit: usize,
    offset: usize,
    page: std::vec::IntoIter<SitemapItem>,
    done: bool,
}

impl<F> Iterator for Pages<'_, F>
where
    F: FnMut(usize, usize) -> Result<Vec<SitemapItem>>,
{
    type Item = Result<SitemapItem>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.page.next() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            match (self.fetch)(self.offset, self.limit) {
                Ok(batch) => {
                    tracing::trace!(offset = self.offset, got = batch.len(), "fetched item page");
                    self.done = batch.len() < self.limit;
                    self.offset += batch.len();
                    self.page = batch.into_iter();
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
