mod init;
pub use init::{init_logging, parse_rotation};
use crate::config::LoggingSettings;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename written to the log directory.
pub const LOG_FILENAME: &str = "reanimate.log";
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Default level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".reanimate")
            .join("logs");
        Self {
            log_dir,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
impl LogConfig {
    /// Build from the `[logging]` config table; unset or unparsable values keep
    /// their defaults.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: settings.dir.clone().unwrap_or(defaults.log_dir),
            log_level: settings
                .level
                .as_deref()
                .and_then(|level| Level::from_str(level).ok())
                .unwrap_or(defaults.log_level),
            json_format: settings.json,
            rotation: settings
                .rotation
                .as_deref()
                .map_or(defaults.rotation, parse_rotation),
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
