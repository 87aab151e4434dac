//! Part-file handles and naming.
//!
//! Each part is created (truncating any leftover from an earlier run), appended
//! to through a buffered handle, and closed before the next one is opened. A
//! sole part is later renamed onto the canonical sitemap name.

mod writer;

pub use writer::{ClosedPart, PartFile};

/// Inserts `n` before the last extension of `base`
/// (e.g. `sitemap.xml` → `sitemap2.xml`, `sitemap` → `sitemap2`).
pub fn part_file_name(base: &str, n: usize) -> String {
    match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}{}.{}", stem, n, ext),
        _ => format!("{}{}", base, n),
    }
}
