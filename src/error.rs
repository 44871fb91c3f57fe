//! Error types for undo and restore operations.

use thiserror::Error;

/// Unified error type for coordinator operations.
///
/// A record that cannot be found during a restore is not an error; it is
/// reported through the invalid-undo redirect instead.
#[derive(Error, Debug)]
pub enum ReanimateError {
    #[error(
        "The model class could not be generated for {controller}: no model named '{model}' is registered. \
         Configure an explicit model for this controller."
    )]
    ModelNotFound { controller: String, model: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReanimateError {
    /// Create a model-not-found error
    pub fn model_not_found(controller: impl Into<String>, model: impl Into<String>) -> Self {
        ReanimateError::ModelNotFound {
            controller: controller.into(),
            model: model.into(),
        }
    }

    /// Create a storage error with a message
    pub fn storage(msg: impl Into<String>) -> Self {
        ReanimateError::Storage(msg.into())
    }
}
