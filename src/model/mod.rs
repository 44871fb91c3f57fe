//! Storage-side collaborators: primary keys, records, and model accessors.
//!
//! The persistence layer is not part of this crate. Hosts implement
//! [`ModelAccessor`] over their ORM and register one accessor per model in a
//! [`ModelRegistry`]. [`InMemoryModel`] is a ready-made accessor backed by an
//! in-process table.

mod key;
pub mod memory;
pub mod registry;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ReanimateError;

pub use key::PrimaryKey;
pub use memory::InMemoryModel;
pub use registry::ModelRegistry;

/// Errors reported by a model accessor.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Record not found: {0}")]
    RecordNotFound(PrimaryKey),

    #[error("Record already deleted: {0}")]
    AlreadyDeleted(PrimaryKey),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<ModelError> for ReanimateError {
    fn from(err: ModelError) -> Self {
        ReanimateError::Storage(err.to_string())
    }
}

/// Anything that can be projected into an undo payload.
pub trait Record {
    /// Short type name of the record's model (e.g. `"User"`).
    fn model_name(&self) -> &str;

    /// The record's primary-key value.
    fn key(&self) -> PrimaryKey;
}

/// A record as returned by [`ModelAccessor::find_with_trashed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub model: String,
    pub key_name: String,
    pub key: PrimaryKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ModelRecord {
    #[must_use]
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Record for ModelRecord {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn key(&self) -> PrimaryKey {
        self.key.clone()
    }
}

/// Capability over one persistence-layer entity type.
#[async_trait]
pub trait ModelAccessor: Send + Sync {
    /// Short type name of the model (e.g. `"User"`).
    fn model_name(&self) -> &str;

    /// Name of the primary-key column.
    fn key_name(&self) -> &str {
        "id"
    }

    /// Look a record up by primary key, including soft-deleted rows.
    async fn find_with_trashed(&self, key: &PrimaryKey)
        -> Result<Option<ModelRecord>, ModelError>;

    /// Clear the soft-delete marker of a record.
    async fn restore(&self, record: &ModelRecord) -> Result<(), ModelError>;
}
