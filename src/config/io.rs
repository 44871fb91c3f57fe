use super::types::ReanimateConfig;
use super::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Canonical location of the configuration file (`~/.reanimate/config.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reanimate").join("config.toml"))
}

/// Load the configuration from `path`.
///
/// Returns `ReanimateConfig::default()` when the file does not exist.
pub fn load_config(path: &Path) -> Result<ReanimateConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(ReanimateConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    debug!(
        controllers = config.controllers.len(),
        "Loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Load the configuration from [`default_config_path`].
pub fn load_default_config() -> Result<ReanimateConfig, ConfigError> {
    match default_config_path() {
        Some(path) => load_config(&path),
        None => {
            warn!("Could not determine home directory; using default config");
            Ok(ReanimateConfig::default())
        }
    }
}

/// Parse configuration TOML.
pub fn parse_config(content: &str) -> Result<ReanimateConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}
