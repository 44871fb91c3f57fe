//! The restore coordinator: undo support for soft-deleted records.
//!
//! A host controller holds one [`RestoreCoordinator`]. After soft-deleting a
//! record it calls [`RestoreCoordinator::build_undo_payload`] and flashes the
//! payload into its response. The undo route later calls
//! [`RestoreCoordinator::undo_delete`] (or
//! [`RestoreCoordinator::restore_or_report`] with an explicit accessor), which
//! restores the record if it still exists and redirects to the index route with
//! a status message.

mod naming;
mod restore;
mod undo;

pub use naming::{infer_model_name, short_type_name, strip_controller};
pub use undo::{UndoLink, UndoPayload};

use crate::config::{ControllerSettings, ReanimateConfig};
use crate::error::ReanimateError;
use crate::model::{ModelRegistry, PrimaryKey};
use crate::routing::Redirector;
use std::sync::Arc;

/// Service object offering restore and undo-payload operations to a controller.
#[derive(Debug, Clone)]
pub struct RestoreCoordinator<R> {
    redirector: R,
    registry: Arc<ModelRegistry>,
    settings: ControllerSettings,
}

impl<R: Redirector> RestoreCoordinator<R> {
    pub fn new(redirector: R, registry: Arc<ModelRegistry>) -> Self {
        Self {
            redirector,
            registry,
            settings: ControllerSettings::default(),
        }
    }

    /// Coordinator for `controller` using its `[controllers.<name>]` settings.
    pub fn from_config(
        config: &ReanimateConfig,
        controller: &str,
        redirector: R,
        registry: Arc<ModelRegistry>,
    ) -> Self {
        Self::new(redirector, registry).with_settings(config.settings_for(controller))
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ControllerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Restore this model instead of inferring one from the controller name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.settings.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_index_route(mut self, route: impl Into<String>) -> Self {
        self.settings.index_route = Some(route.into());
        self
    }

    #[must_use]
    pub fn with_undo_route(mut self, route: impl Into<String>) -> Self {
        self.settings.undo_route = Some(route.into());
        self
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn redirector(&self) -> &R {
        &self.redirector
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Ready-made undo action: resolve the controller's model, then restore.
    ///
    /// Uses the configured index route, if any.
    pub async fn undo_delete(
        &self,
        controller_type_name: &str,
        record_id: &PrimaryKey,
    ) -> Result<R::Redirect, ReanimateError> {
        let accessor = self.resolve_model_accessor(controller_type_name)?;
        self.restore_or_report(record_id, accessor.as_ref(), None)
            .await
    }
}
