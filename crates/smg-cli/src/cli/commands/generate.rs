//! `smg generate` – write the sitemap for the given item files.

use anyhow::Result;
use smg_core::config::SitemapConfig;
use smg_core::source::{self, ItemSource, StaticSource};
use smg_core::writer::OutputKind;
use std::path::PathBuf;

pub fn run_generate(cfg: &SitemapConfig, items: &[PathBuf]) -> Result<()> {
    let mut sources: Vec<Box<dyn ItemSource>> = Vec::with_capacity(items.len());
    for path in items {
        let list = StaticSource::from_json_file(path)?;
        tracing::debug!(path = %path.display(), items = list.len(), "loaded item list");
        sources.push(Box::new(list));
    }

    let out = source::generate(cfg, &mut sources)?;
    match out.kind {
        OutputKind::Single => println!("{} ({} urls)", out.path.display(), out.urls_written),
        OutputKind::Index => println!(
            "{} (index of {} files, {} urls)",
            out.path.display(),
            out.parts.len(),
            out.urls_written
        ),
    }
    Ok(())
}
