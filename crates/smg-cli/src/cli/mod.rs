//! CLI for the SMG sitemap generator.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use smg_core::config::{self, SitemapConfig};
use std::path::PathBuf;

use commands::{run_config, run_generate};

/// Top-level CLI for the SMG sitemap generator.
#[derive(Debug, Parser)]
#[command(name = "smg")]
#[command(about = "SMG: sitemap.xml generator with file rollover and sitemap index", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/smg/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Per-run overrides of config file values.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Directory receiving the sitemap files (usually the webroot).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Canonical sitemap file name (e.g. sitemap.xml).
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Maximum <url> entries per file before rolling over.
    #[arg(long, value_name = "N")]
    pub urls_per_file: Option<usize>,

    /// Public URL of the output directory, used in the sitemap index.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Overrides {
    pub fn apply(self, cfg: &mut SitemapConfig) {
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        if let Some(name) = self.file_name {
            cfg.file_name = name;
        }
        if let Some(n) = self.urls_per_file {
            cfg.urls_per_file = n;
        }
        if let Some(url) = self.base_url {
            cfg.base_url = Some(url);
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate sitemap files from one or more JSON item lists.
    Generate {
        /// JSON files, each an array of {loc, lastmod, changefreq, priority, images, alternateLinks}.
        #[arg(required = true, value_name = "ITEMS")]
        items: Vec<PathBuf>,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let (cfg_path, mut cfg) = match cli.config {
            Some(path) => {
                let cfg = config::load_from_path(&path)?;
                (path, cfg)
            }
            None => (config::config_path()?, config::load_or_init()?),
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate { items, overrides } => {
                overrides.apply(&mut cfg);
                run_generate(&cfg, &items)?;
            }
            CliCommand::Config => run_config(&cfg_path, &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
