//! Drive a full generation run: sources → writer → canonical sitemap.

use anyhow::{Context, Result};

use super::ItemSource;
use crate::config::SitemapConfig;
use crate::writer::{SchemaSet, SitemapOutput, SitemapWriter};

/// Namespaces needed by the union of all sources' capabilities.
pub fn collect_schemas(sources: &[Box<dyn ItemSource>]) -> SchemaSet {
    sources
        .iter()
        .fold(SchemaSet::new(), |schemas, source| {
            source.capabilities().apply(schemas)
        })
}

/// Write every item of every source, in order, into the sitemap described by `config`.
///
/// Items without `loc` are logged and skipped. Config, I/O, `lastmod` parse
/// and source errors abort the run; part files already written stay on disk.
pub fn generate(config: &SitemapConfig, sources: &mut [Box<dyn ItemSource>]) -> Result<SitemapOutput> {
    let schemas = collect_schemas(sources);
    let mut writer = SitemapWriter::new(config, schemas)?;
    writer.start()?;

    let mut skipped = 0usize;
    for source in sources.iter_mut() {
        let name = source.name().to_string();
        let mut written = 0usize;

        for item in source.items() {
            let item = item.with_context(|| format!("read items from {}", name))?;
            let Some(entry) = item.into_url_entry() else {
                tracing::warn!(source = %name, "item has no loc, skipped");
                skipped += 1;
                continue;
            };
            let loc = entry.loc().to_string();
            if writer
                .write_url(&entry)
                .with_context(|| format!("write {} from {}", loc, name))?
            {
                written += 1;
            }
        }

        tracing::debug!(source = %name, written, "source done");
    }

    if skipped > 0 {
        tracing::warn!(skipped, "items without loc were skipped");
    }

    Ok(writer.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SitemapError;
    use crate::source::{BatchSource, Capabilities, ImageItem, SitemapItem, StaticSource};
    use crate::writer::OutputKind;
    use std::fs;

    fn config_in(dir: &std::path::Path, urls_per_file: usize) -> SitemapConfig {
        SitemapConfig {
            output_dir: dir.to_path_buf(),
            urls_per_file,
            base_url: Some("https://example.com".to_string()),
            ..SitemapConfig::default()
        }
    }

    #[test]
    fn schemas_union_across_sources() {
        let mut gallery = SitemapItem::new("https://example.com/g");
        gallery.images.push(ImageItem {
            loc: Some("https://example.com/g.png".to_string()),
            ..ImageItem::default()
        });
        let sources: Vec<Box<dyn ItemSource>> = vec![
            Box::new(StaticSource::new("pages", vec![SitemapItem::new("https://example.com/")])),
            Box::new(StaticSource::new("gallery", vec![gallery])),
        ];
        let schemas = collect_schemas(&sources);
        assert_eq!(schemas, SchemaSet::new().with_images());
    }

    #[test]
    fn generate_skips_items_without_loc() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec![
            SitemapItem::new("https://example.com/a"),
            SitemapItem::default(),
            SitemapItem::new("https://example.com/b"),
        ];
        let mut sources: Vec<Box<dyn ItemSource>> = vec![Box::new(StaticSource::new("pages", items))];
        let out = generate(&config_in(dir.path(), 10), &mut sources).unwrap();

        assert_eq!(out.kind, OutputKind::Single);
        assert_eq!(out.urls_written, 2);
        let xml = fs::read_to_string(out.path).unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn generate_across_sources_rolls_over() {
        let dir = tempfile::tempdir().unwrap();
        let rows = BatchSource::new("rows", Capabilities::default(), |offset, limit| {
            Ok((offset..7usize.min(offset + limit))
                .map(|n| SitemapItem::new(format!("https://example.com/row/{}", n)))
                .collect())
        })
        .with_batch_size(3);
        let mut sources: Vec<Box<dyn ItemSource>> = vec![
            Box::new(StaticSource::new("pages", vec![SitemapItem::new("https://example.com/")])),
            Box::new(rows),
        ];
        let out = generate(&config_in(dir.path(), 3), &mut sources).unwrap();

        assert_eq!(out.kind, OutputKind::Index);
        assert_eq!(out.urls_written, 8);
        assert_eq!(out.parts.len(), 3);
        let last = fs::read_to_string(dir.path().join("sitemap3.xml")).unwrap();
        assert!(last.contains("https://example.com/row/5"));
        assert!(last.contains("https://example.com/row/6"));
    }

    #[test]
    fn generate_aborts_on_bad_lastmod() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = SitemapItem::new("https://example.com/bad");
        bad.lastmod = Some("whenever".into());
        let mut sources: Vec<Box<dyn ItemSource>> = vec![Box::new(StaticSource::new("pages", vec![bad]))];
        let err = generate(&config_in(dir.path(), 10), &mut sources).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SitemapError>(),
            Some(SitemapError::Parse { .. })
        ));
        assert!(!dir.path().join("sitemap.xml").exists());
    }

    #[test]
    fn generate_rejects_bad_config_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut sources: Vec<Box<dyn ItemSource>> = vec![];
        let err = generate(&config_in(&dir.path().join("missing"), 10), &mut sources).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SitemapError>(),
            Some(SitemapError::Config { .. })
        ));
    }
}
