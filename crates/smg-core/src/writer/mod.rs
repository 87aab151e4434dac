//! Streaming sitemap writer with per-file rollover.
//!
//! Entries are appended to numbered part files (`sitemap1.xml`, `sitemap2.xml`, ...)
//! capped at `urls_per_file` entries each. On [`SitemapWriter::finish`] a sole
//! part is renamed to the canonical name; several parts get a sitemap index
//! written under the canonical name instead.

mod index;
mod schema;

pub use index::render_index;
pub use schema::{SchemaSet, IMAGE_NS, SITEMAP_NS, XHTML_NS};

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::config::SitemapConfig;
use crate::entry::UrlEntry;
use crate::error::{Result, SitemapError};
use crate::storage::{part_file_name, ClosedPart, PartFile};

const URLSET_FOOTER: &str = "</urlset>";

enum State {
    Idle,
    Open(PartFile),
    Closed(ClosedPart),
}

/// What the canonical sitemap file turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// A single `<urlset>` (the only part, renamed).
    Single,
    /// A `<sitemapindex>` referencing the part files.
    Index,
}

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct SitemapOutput {
    /// Canonical sitemap path.
    pub path: PathBuf,
    pub kind: OutputKind,
    /// Part file names in creation order. For [`OutputKind::Single`] the one
    /// part no longer exists under this name.
    pub parts: Vec<String>,
    pub urls_written: usize,
}

/// Owns the output file lifecycle: `start` → `write_url`* → `finish`.
///
/// Single use; `finish` consumes the writer.
pub struct SitemapWriter {
    output_dir: PathBuf,
    file_name: String,
    urls_per_file: usize,
    base_url: String,
    schemas: SchemaSet,
    state: State,
    /// Entries in the currently open part.
    item_count: usize,
    files: Vec<String>,
    urls_written: usize,
}

impl SitemapWriter {
    /// Validates `config` and prepares a writer. No file is touched until `start`.
    pub fn new(config: &SitemapConfig, schemas: SchemaSet) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            output_dir: config.output_dir.clone(),
            file_name: config.file_name.clone(),
            urls_per_file: config.urls_per_file,
            base_url: config.index_base_url().to_string(),
            schemas,
            state: State::Idle,
            item_count: 0,
            files: Vec::new(),
            urls_written: 0,
        })
    }

    /// Open part #1 and write the `<urlset>` header.
    pub fn start(&mut self) -> Result<()> {
        if !matches!(self.state, State::Idle) {
            return Err(SitemapError::state("start called twice"));
        }
        self.begin_part()
    }

    /// Append one entry, rolling over to a new part when the current one is full.
    ///
    /// Returns `Ok(false)` without writing anything when the entry has no
    /// location. A `lastmod` parse failure is returned before any file is
    /// touched, so the open part stays intact.
    pub fn write_url(&mut self, entry: &UrlEntry) -> Result<bool> {
        let xml = entry.serialize()?;
        if xml.is_empty() {
            tracing::warn!("skipping sitemap entry without loc");
            return Ok(false);
        }

        if self.item_count + 1 > self.urls_per_file {
            self.close_part()?;
            self.begin_part()?;
            tracing::debug!(
                part = self.files.len(),
                written = self.urls_written,
                "sitemap part full, rolled over"
            );
        }

        let part = self.open_part()?;
        part.append(&xml)?;
        part.append("\n")?;
        self.item_count += 1;
        self.urls_written += 1;
        Ok(true)
    }

    /// Entries in the currently open part.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Part file names created so far.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Close the open part and produce the canonical sitemap.
    ///
    /// May be called at any point to keep whatever has been written so far.
    /// A writer that was never started writes an empty `<urlset>`.
    pub fn finish(mut self) -> Result<SitemapOutput> {
        if matches!(self.state, State::Idle) {
            self.start()?;
        }
        self.close_part()?;

        let final_path = self.output_dir.join(&self.file_name);
        let state = std::mem::replace(&mut self.state, State::Idle);

        let kind = match state {
            State::Closed(part) if self.files.len() == 1 => {
                part.rename_to(&final_path)?;
                tracing::info!(
                    path = %final_path.display(),
                    urls = self.urls_written,
                    "sitemap written"
                );
                OutputKind::Single
            }
            _ => {
                self.write_index(&final_path)?;
                tracing::info!(
                    path = %final_path.display(),
                    parts = self.files.len(),
                    urls = self.urls_written,
                    "sitemap index written"
                );
                OutputKind::Index
            }
        };

        Ok(SitemapOutput {
            path: final_path,
            kind,
            parts: self.files,
            urls_written: self.urls_written,
        })
    }

    fn begin_part(&mut self) -> Result<()> {
        let name = part_file_name(&self.file_name, self.files.len() + 1);
        let path = self.output_dir.join(&name);
        let mut part = PartFile::create(&path)?;
        self.files.push(name);
        part.append(&self.schemas.urlset_header())?;
        tracing::debug!(path = %path.display(), "opened sitemap part");
        self.state = State::Open(part);
        self.item_count = 0;
        Ok(())
    }

    fn close_part(&mut self) -> Result<()> {
        let mut part = match std::mem::replace(&mut self.state, State::Idle) {
            State::Open(part) => part,
            other => {
                self.state = other;
                return Ok(());
            }
        };
        part.append(URLSET_FOOTER)?;
        self.state = State::Closed(part.close()?);
        Ok(())
    }

    fn open_part(&mut self) -> Result<&mut PartFile> {
        match &mut self.state {
            State::Open(part) => Ok(part),
            State::Idle => Err(SitemapError::state("write_url called before start")),
            State::Closed(_) => Err(SitemapError::state("no sitemap part is open")),
        }
    }

    fn write_index(&self, final_path: &Path) -> Result<()> {
        let xml = render_index(&self.base_url, &self.files, &Utc::now());
        let mut out = PartFile::create(final_path)?;
        out.append(&xml)?;
        out.close()?;
        Ok(())
    }
}
