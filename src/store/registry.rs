//! Concurrent registry of endpoint models.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use crate::model::{EndpointModel, ModelKey};
use crate::store::error::StoreError;

/// Capability interface over the model registry.
///
/// One production implementation exists; tests substitute their own double
/// where the HTTP layer is exercised without a real registry.
pub trait ModelStore: Send + Sync {
    /// Register a batch of models atomically.
    ///
    /// The whole batch is validated before anything is stored: every model
    /// needs a non-empty path and method, and no key may collide with the
    /// registry or with another model in the batch. On success, every model
    /// is stored and the count is returned.
    fn register_all(&self, models: Vec<EndpointModel>) -> Result<usize, StoreError>;

    /// Fetch the model registered for (path, method).
    ///
    /// Exact match on the normalized key; the caller receives an owned
    /// read-only copy.
    fn lookup(&self, path: &str, method: &str) -> Result<EndpointModel, StoreError>;
}

/// In-process registry backed by a reader/writer lock.
///
/// Models live until process exit; nothing is ever overwritten or removed.
pub struct InMemoryModelStore {
    models: RwLock<HashMap<ModelKey, EndpointModel>>,
}

impl InMemoryModelStore {
    pub fn new() -> Self {
        Self {
            models: RwLock::new(HashMap::new()),
        }
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore for InMemoryModelStore {
    fn register_all(&self, models: Vec<EndpointModel>) -> Result<usize, StoreError> {
        // The write lock is held across validation and insertion so that a
        // concurrent batch cannot register a colliding key in between.
        let mut registry = self.models.write().unwrap_or_else(PoisonError::into_inner);

        let mut batch_keys: HashSet<ModelKey> = HashSet::with_capacity(models.len());
        for model in &models {
            if model.path.is_empty() || model.method.is_empty() {
                return Err(StoreError::InvalidModel {
                    path: model.path.clone(),
                    method: model.method.clone(),
                });
            }

            let key = model.key();
            if registry.contains_key(&key) || !batch_keys.insert(key) {
                return Err(StoreError::DuplicateModel {
                    path: model.path.clone(),
                    method: model.method.clone(),
                });
            }
        }

        let stored = models.len();
        for model in models {
            tracing::info!(path = %model.path, method = %model.method, "model stored");
            registry.insert(model.key(), model);
        }

        Ok(stored)
    }

    fn lookup(&self, path: &str, method: &str) -> Result<EndpointModel, StoreError> {
        let key = ModelKey::new(path, method);

        let registry = self.models.read().unwrap_or_else(PoisonError::into_inner);

        match registry.get(&key) {
            Some(model) => {
                tracing::debug!(path, method, "model retrieved");
                Ok(model.clone())
            }
            None => Err(StoreError::ModelNotFound {
                path: path.to_string(),
                method: method.to_string(),
            }),
        }
    }
}
