use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::request::DEFAULT_DESTINATION;

/// Configuration loaded from `~/.config/download_avatar/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Filename the downloaded image is written to, relative to the working directory.
    #[serde(default = "default_destination")]
    pub destination: String,
}

fn default_destination() -> String {
    DEFAULT_DESTINATION.to_string()
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("download_avatar")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AvatarConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AvatarConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AvatarConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Like `load_or_init`, but never fails: problems are logged and defaults are used.
pub fn load_or_default() -> AvatarConfig {
    match load_or_init() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            AvatarConfig::default()
        }
    }
}
