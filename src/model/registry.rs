use super::ModelAccessor;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// In-memory registry of model accessors keyed by model short name.
///
/// This is the explicit replacement for looking a model type up by its name at
/// runtime: hosts register every model that controllers may restore.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, Arc<dyn ModelAccessor>>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an accessor under its `model_name()`.
    ///
    /// A second accessor with the same name replaces the first.
    pub fn register(&mut self, accessor: Arc<dyn ModelAccessor>) {
        let name = accessor.model_name().to_string();
        if self.models.contains_key(&name) {
            warn!(model = %name, "Duplicate model registration, replacing earlier accessor");
        } else {
            debug!(model = %name, "Registered model accessor");
        }
        self.models.insert(name, accessor);
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with_model(mut self, accessor: Arc<dyn ModelAccessor>) -> Self {
        self.register(accessor);
        self
    }

    /// Get an accessor by exact (case-sensitive) model name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn ModelAccessor>> {
        self.models.get(name).map(Arc::clone)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered model names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .finish()
    }
}
