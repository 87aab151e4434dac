//! Buffered append-only handle for one output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SitemapError};

/// An open output file. Exactly one exists per writer at any time.
#[derive(Debug)]
pub struct PartFile {
    out: BufWriter<File>,
    path: PathBuf,
}

impl PartFile {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| SitemapError::io(path, e))?;
        Ok(PartFile {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn append(&mut self, content: &str) -> Result<()> {
        self.out
            .write_all(content.as_bytes())
            .map_err(|e| SitemapError::io(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered bytes and release the handle.
    pub fn close(self) -> Result<ClosedPart> {
        let PartFile { out, path } = self;
        let file = out
            .into_inner()
            .map_err(|e| SitemapError::io(&path, e.into_error()))?;
        file.sync_all().map_err(|e| SitemapError::io(&path, e))?;
        drop(file);
        Ok(ClosedPart { path })
    }
}

/// A part that has been fully written and closed.
#[derive(Debug)]
pub struct ClosedPart {
    path: PathBuf,
}

impl ClosedPart {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename onto `final_path`, replacing whatever is there.
    pub fn rename_to(self, final_path: &Path) -> Result<()> {
        std::fs::rename(&self.path, final_path).map_err(|e| SitemapError::io(final_path, e))?;
        tracing::debug!(
            from = %self.path.display(),
            to = %final_path.display(),
            "renamed sitemap part"
        );
        Ok(())
    }
}
