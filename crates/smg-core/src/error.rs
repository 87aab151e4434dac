//! Error type shared by the writer, storage and config layers.

use std::path::PathBuf;

/// Fatal errors of a generation run. Validation problems on single entries
/// (missing `loc`, image without `loc`) are not errors: they are logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// Output directory, file name, cap or base URL is unusable. Raised before any file is written.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Create/write/rename/close failed. Part files already on disk are left as they are.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `lastmod` string that no supported date-time format accepts.
    #[error("cannot parse lastmod {value:?}: {message}")]
    Parse { value: String, message: String },

    /// Writer used out of order (e.g. `write_url` before `start`).
    #[error("sitemap writer misuse: {message}")]
    State { message: String },
}

impl SitemapError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SitemapError::Config {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SitemapError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn state(message: impl Into<String>) -> Self {
        SitemapError::State {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SitemapError>;
