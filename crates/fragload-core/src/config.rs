use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Global configuration loaded from `~/.config/fragload/config.toml`.
///
/// Only transport-layer knobs live here; the loader itself has no per-call
/// policy to configure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragloadConfig {
    /// Connect timeout for fragment requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Overall timeout for one fragment request, in seconds.
    pub request_timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirects: u32,
}

impl Default for FragloadConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            request_timeout_secs: 300,
            max_redirects: 10,
        }
    }
}

impl FragloadConfig {
    /// Transport options derived from this config.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
            max_redirections: self.max_redirects,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fragload")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FragloadConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FragloadConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FragloadConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FragloadConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.request_timeout_secs, 300);
        assert_eq!(cfg.max_redirects, 10);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FragloadConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FragloadConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
        assert_eq!(parsed.max_redirects, cfg.max_redirects);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            connect_timeout_secs = 5
            request_timeout_secs = 60
            max_redirects = 3
        "#;
        let cfg: FragloadConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.max_redirects, 3);
    }

    #[test]
    fn fetch_options_mirror_config() {
        let cfg = FragloadConfig {
            connect_timeout_secs: 5,
            request_timeout_secs: 60,
            max_redirects: 3,
        };
        let opts = cfg.fetch_options();
        assert_eq!(opts.connect_timeout, Duration::from_secs(5));
        assert_eq!(opts.timeout, Duration::from_secs(60));
        assert_eq!(opts.max_redirections, 3);
    }
}
