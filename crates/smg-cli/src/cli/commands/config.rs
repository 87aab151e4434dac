//! `smg config` – print where the config lives and what it resolves to.

use anyhow::{Context, Result};
use smg_core::config::SitemapConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &SitemapConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    println!("# {}", path.display());
    print!("{}", toml);
    Ok(())
}
