use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default placeholder substituted into each targeted parameter.
pub const DEFAULT_PLACEHOLDER: &str = "{payload}";

/// Default output file, appended to on every run.
pub const DEFAULT_OUTPUT: &str = "output_reflection.txt";

/// Global configuration loaded from `~/.config/xrc/config.toml`.
/// Every field is optional in the file; CLI flags override whatever is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XrcConfig {
    /// Number of worker threads (must be at least 1).
    pub threads: usize,
    /// Output file that generated URLs are appended to.
    pub output: PathBuf,
    /// Token written in place of the targeted parameter's value.
    pub placeholder: String,
}

impl Default for XrcConfig {
    fn default() -> Self {
        Self {
            threads: 2,
            output: PathBuf::from(DEFAULT_OUTPUT),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl XrcConfig {
    /// Reject values no run can use.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            anyhow::bail!("threads must be at least 1");
        }
        if self.placeholder.is_empty() {
            anyhow::bail!("placeholder must not be empty");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xrc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<XrcConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: XrcConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// When no config location is usable (no home dir, read-only home), the
/// built-in defaults are returned with a warning. A config file that exists
/// but does not parse is an error.
pub fn load_or_init() -> Result<XrcConfig> {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("no config location ({:#}); using defaults", e);
            return Ok(XrcConfig::default());
        }
    };
    if !path.exists() {
        let default_cfg = XrcConfig::default();
        if let Err(e) = write_default(&path, &default_cfg) {
            tracing::warn!("could not create {} ({:#}); using defaults", path.display(), e);
        } else {
            tracing::info!("created default config at {}", path.display());
        }
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

fn write_default(path: &Path, cfg: &XrcConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
