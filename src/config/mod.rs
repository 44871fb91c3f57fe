//! Configuration loaded from `config.toml`: logging and per-controller undo
//! settings.
//!
//! The file is optional; every field falls back to its default.

mod io;
mod types;

pub use io::{default_config_path, load_config, load_default_config, parse_config};
pub use types::{ControllerSettings, LoggingSettings, ReanimateConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
