//! Sitemap generation core.
//!
//! [`writer::SitemapWriter`] streams [`entry::UrlEntry`] values into numbered
//! `<urlset>` part files and finishes with either a single canonical sitemap
//! or a sitemap index. [`source`] adapts content records to entries and drives
//! a whole run.

pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod source;
pub mod storage;
pub mod writer;

pub use error::{Result, SitemapError};
