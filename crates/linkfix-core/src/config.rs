use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::pages;

/// Global configuration loaded from `~/.config/linkfix/config.toml`.
///
/// Everything is optional: with no config file (or a default one) the
/// compiled-in base URL and page table are used unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkfixConfig {
    /// Docs root the corrected URLs point at.
    pub base_url: String,
    /// Extra slug -> site path entries overlaid on the built-in table.
    /// An entry for an existing slug replaces the built-in path.
    #[serde(default)]
    pub pages: BTreeMap<String, String>,
}

impl Default for LinkfixConfig {
    fn default() -> Self {
        Self {
            base_url: pages::BASE_URL.to_string(),
            pages: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkfix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkfixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkfixConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path (also used by tests).
pub fn load_from(path: &Path) -> Result<LinkfixConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: LinkfixConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_builtins() {
        let cfg = LinkfixConfig::default();
        assert_eq!(cfg.base_url, pages::BASE_URL);
        assert!(cfg.pages.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkfixConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkfixConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert!(parsed.pages.is_empty());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "https://example.com/docs"

            [pages]
            install = "/setup/install.md"
            release-notes = "/release-notes.md"
        "#;
        let cfg: LinkfixConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://example.com/docs");
        assert_eq!(cfg.pages.get("install").unwrap(), "/setup/install.md");
        assert_eq!(cfg.pages.len(), 2);
    }

    #[test]
    fn config_base_url_only() {
        let toml = r#"base_url = "https://example.com/docs""#;
        let cfg: LinkfixConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://example.com/docs");
        assert!(cfg.pages.is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"https://example.com/d\"\n\n[pages]\nfoo = \"/a/foo.md\"\n",
        )
        .unwrap();

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.base_url, "https://example.com/d");
        assert_eq!(cfg.pages.get("foo").unwrap(), "/a/foo.md");
    }
}
