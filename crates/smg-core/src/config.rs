use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SitemapError;

/// Upper bound on `<url>` entries per file set by the sitemaps.org protocol.
pub const PROTOCOL_MAX_URLS: usize = 50_000;

/// Generator configuration loaded from `~/.config/smg/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Directory receiving part files and the final sitemap (usually the webroot).
    pub output_dir: PathBuf,
    /// Canonical sitemap file name; part files get a number before the extension.
    pub file_name: String,
    /// Maximum `<url>` entries per part file before rolling over to the next.
    pub urls_per_file: usize,
    /// Public URL of `output_dir`, used for `<loc>` in the sitemap index (e.g. `https://example.com`).
    pub base_url: Option<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_name: "sitemap.xml".to_string(),
            urls_per_file: 10_000,
            base_url: None,
        }
    }
}

impl SitemapConfig {
    /// Checks everything that would otherwise fail halfway through a run.
    pub fn validate(&self) -> std::result::Result<(), SitemapError> {
        match fs::metadata(&self.output_dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(SitemapError::config(format!(
                    "output_dir {} is not a directory",
                    self.output_dir.display()
                )))
            }
            Err(e) => {
                return Err(SitemapError::config(format!(
                    "output_dir {} is not accessible: {}",
                    self.output_dir.display(),
                    e
                )))
            }
        }

        if self.file_name.is_empty() {
            return Err(SitemapError::config("file_name is empty"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(SitemapError::config(format!(
                "file_name {:?} must not contain a path separator",
                self.file_name
            )));
        }

        if self.urls_per_file == 0 {
            return Err(SitemapError::config("urls_per_file must be at least 1"));
        }
        if self.urls_per_file > PROTOCOL_MAX_URLS {
            tracing::warn!(
                urls_per_file = self.urls_per_file,
                "urls_per_file exceeds the sitemap protocol limit of {}",
                PROTOCOL_MAX_URLS
            );
        }

        if let Some(base) = &self.base_url {
            let parsed = url::Url::parse(base).map_err(|e| {
                SitemapError::config(format!("base_url {:?} is not a valid URL: {}", base, e))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(SitemapError::config(format!(
                    "base_url {:?} must use http or https",
                    base
                )));
            }
        }

        Ok(())
    }

    /// Base URL without a trailing slash; empty when unset.
    pub fn index_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitemapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SitemapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<SitemapConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: SitemapConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_in(dir: &Path) -> SitemapConfig {
        SitemapConfig {
            output_dir: dir.to_path_buf(),
            base_url: Some("https://example.com/".to_string()),
            ..SitemapConfig::default()
        }
    }

    #[test]
    fn default_config_values() {
        let cfg = SitemapConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert_eq!(cfg.file_name, "sitemap.xml");
        assert_eq!(cfg.urls_per_file, 10_000);
        assert!(cfg.base_url.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SitemapConfig {
            base_url: Some("https://example.com".to_string()),
            ..SitemapConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SitemapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            urls_per_file = 500
            base_url = "https://example.com"
        "#;
        let cfg: SitemapConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.urls_per_file, 500);
        assert_eq!(cfg.file_name, "sitemap.xml");
        assert_eq!(cfg.base_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_dir = \"/srv/www\"\nfile_name = \"map.xml\"\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/srv/www"));
        assert_eq!(cfg.file_name, "map.xml");
    }

    #[test]
    fn validate_accepts_good_config() {
        let dir = tempfile::tempdir().unwrap();
        valid_in(dir.path()).validate().unwrap();
    }

    #[test]
    fn validate_rejects_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = valid_in(&dir.path().join("missing"));
        assert!(matches!(cfg.validate(), Err(SitemapError::Config { .. })));
    }

    #[test]
    fn validate_rejects_file_as_output_dir() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let cfg = valid_in(f.path());
        assert!(matches!(cfg.validate(), Err(SitemapError::Config { .. })));
    }

    #[test]
    fn validate_rejects_bad_file_name_and_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = valid_in(dir.path());
        cfg.file_name = "nested/sitemap.xml".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = valid_in(dir.path());
        cfg.file_name = String::new();
        assert!(cfg.validate().is_err());

        let mut cfg = valid_in(dir.path());
        cfg.urls_per_file = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = valid_in(dir.path());
        cfg.base_url = Some("example.com".to_string());
        assert!(cfg.validate().is_err());

        cfg.base_url = Some("ftp://example.com".to_string());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn index_base_url_trims_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(valid_in(dir.path()).index_base_url(), "https://example.com");
        assert_eq!(SitemapConfig::default().index_base_url(), "");
    }
}
