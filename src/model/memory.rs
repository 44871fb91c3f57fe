//! In-process soft-delete table implementing [`ModelAccessor`].

use super::{ModelAccessor, ModelError, ModelRecord, PrimaryKey};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// A model whose rows live in memory, each with a `deleted_at` marker.
#[derive(Debug)]
pub struct InMemoryModel {
    name: String,
    key_name: String,
    rows: RwLock<HashMap<PrimaryKey, Option<DateTime<Utc>>>>,
}

impl InMemoryModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_name: "id".to_string(),
            rows: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = key_name.into();
        self
    }

    /// Numeric string keys share a row with their integer form, so `"1"` and
    /// `1` address the same record.
    fn storage_key(key: PrimaryKey) -> PrimaryKey {
        match key {
            PrimaryKey::Str(raw) => raw
                .parse::<i64>()
                .map_or(PrimaryKey::Str(raw), PrimaryKey::Int),
            int => int,
        }
    }

    fn record(&self, key: PrimaryKey, deleted_at: Option<DateTime<Utc>>) -> ModelRecord {
        ModelRecord {
            model: self.name.clone(),
            key_name: self.key_name.clone(),
            key,
            deleted_at,
        }
    }

    /// Insert (or revive) a live row. A numeric string key is stored as an
    /// integer key.
    pub async fn insert(&self, key: impl Into<PrimaryKey>) -> ModelRecord {
        let key = Self::storage_key(key.into());
        self.rows.write().await.insert(key.clone(), None);
        self.record(key, None)
    }

    /// Soft-delete a live row and return it as it now stands.
    pub async fn soft_delete(&self, key: impl Into<PrimaryKey>) -> Result<ModelRecord, ModelError> {
        let key = Self::storage_key(key.into());
        let mut rows = self.rows.write().await;
        let deleted_at = rows
            .get_mut(&key)
            .ok_or_else(|| ModelError::RecordNotFound(key.clone()))?;
        if deleted_at.is_some() {
            return Err(ModelError::AlreadyDeleted(key));
        }
        let now = Utc::now();
        *deleted_at = Some(now);
        drop(rows);
        info!(model = %self.name, key = %key, "Soft-deleted record");
        Ok(self.record(key, Some(now)))
    }

    /// `Some(true)` when the row exists and is soft-deleted, `None` when absent.
    pub async fn is_trashed(&self, key: &PrimaryKey) -> Option<bool> {
        self.rows
            .read()
            .await
            .get(&Self::storage_key(key.clone()))
            .map(Option::is_some)
    }

    /// Look up a live row; soft-deleted rows are excluded.
    pub async fn find(&self, key: &PrimaryKey) -> Option<ModelRecord> {
        let key = Self::storage_key(key.clone());
        let rows = self.rows.read().await;
        match rows.get(&key) {
            Some(None) => Some(self.record(key, None)),
            _ => None,
        }
    }

    /// Number of live rows.
    pub async fn count(&self) -> usize {
        self.rows
            .read()
            .await
            .values()
            .filter(|deleted_at| deleted_at.is_none())
            .count()
    }
}

#[async_trait]
impl ModelAccessor for InMemoryModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn key_name(&self) -> &str {
        &self.key_name
    }

    async fn find_with_trashed(
        &self,
        key: &PrimaryKey,
    ) -> Result<Option<ModelRecord>, ModelError> {
        let key = Self::storage_key(key.clone());
        let rows = self.rows.read().await;
        Ok(rows
            .get(&key)
            .map(|deleted_at| self.record(key.clone(), *deleted_at)))
    }

    async fn restore(&self, record: &ModelRecord) -> Result<(), ModelError> {
        let key = Self::storage_key(record.key.clone());
        let mut rows = self.rows.write().await;
        let deleted_at = rows
            .get_mut(&key)
            .ok_or_else(|| ModelError::RecordNotFound(key.clone()))?;
        *deleted_at = None;
        drop(rows);
        info!(model = %self.name, key = %record.key, "Restored record");
        Ok(())
    }
}
