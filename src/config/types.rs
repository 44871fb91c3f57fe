use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Per-controller undo settings (`[controllers.<Name>]` table).
///
/// Every field is optional; an empty string counts as unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ControllerSettings {
    /// Model to restore, bypassing name inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Route to redirect to after a restore attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_route: Option<String>,
    /// Route the undo link points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undo_route: Option<String>,
}

impl ControllerSettings {
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        non_empty(self.model.as_ref())
    }

    #[must_use]
    pub fn index_route(&self) -> Option<&str> {
        non_empty(self.index_route.as_ref())
    }

    #[must_use]
    pub fn undo_route(&self) -> Option<&str> {
        non_empty(self.undo_route.as_ref())
    }
}

/// Logging settings (`[logging]` table).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set (`trace` .. `error`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
    /// `daily`, `hourly`, or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Top-level configuration, deserialized from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReanimateConfig {
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Settings keyed by controller short type name.
    #[serde(default)]
    pub controllers: BTreeMap<String, ControllerSettings>,
}

impl ReanimateConfig {
    /// Settings for a controller, or defaults when it has no table.
    #[must_use]
    pub fn settings_for(&self, controller: &str) -> ControllerSettings {
        self.controllers.get(controller).cloned().unwrap_or_default()
    }
}
