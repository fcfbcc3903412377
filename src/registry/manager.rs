//! Alias-keyed instance storage.

use super::error::RegistryError;
use super::types::Destroy;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Thread-safe map from alias to shared instance.
///
/// Values are handed out by clone, so `T` is normally an `Arc` handle.
/// Destroy hooks always run after the map lock is released.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_balance::registry::{Destroy, InstanceRegistry};
///
/// #[derive(Debug)]
/// struct Db { url: String }
/// impl Destroy for Db {}
///
/// let registry = InstanceRegistry::new();
/// registry.add("primary", Arc::new(Db { url: "postgres://a".into() }));
///
/// let db = registry.load("primary").unwrap();
/// assert_eq!(db.url, "postgres://a");
/// assert!(registry.load("replica").unwrap_err().is_not_found());
/// ```
#[derive(Debug)]
pub struct InstanceRegistry<T> {
    instances: RwLock<HashMap<String, T>>,
}

impl<T: Clone + Destroy> InstanceRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the instance stored under `alias`.
    pub fn load(&self, alias: &str) -> Result<T, RegistryError> {
        self.instances
            .read()
            .get(alias)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                alias: alias.to_string(),
            })
    }

    /// Stores `instance` under `alias`.
    ///
    /// A previous instance at the same alias is destroyed. A failure to
    /// destroy it is logged and otherwise ignored.
    pub fn add(&self, alias: impl Into<String>, instance: T) {
        let alias = alias.into();
        let replaced = self.instances.write().insert(alias.clone(), instance);

        match replaced {
            Some(old) => {
                if let Err(err) = old.destroy() {
                    warn!(%alias, error = %err, "failed to destroy replaced instance");
                }
                debug!(%alias, "replaced instance");
            }
            None => debug!(%alias, "stored instance"),
        }
    }

    /// Removes the instance under `alias` and runs its destroy hook.
    ///
    /// Returns [`RegistryError::NotFound`] when nothing is stored there;
    /// callers that treat removal as best-effort can ignore it.
    pub fn remove(&self, alias: &str) -> Result<(), RegistryError> {
        let removed = self.instances.write().remove(alias);
        let Some(instance) = removed else {
            return Err(RegistryError::NotFound {
                alias: alias.to_string(),
            });
        };

        debug!(alias, "removed instance");
        instance
            .destroy()
            .map_err(|source| RegistryError::Destroy {
                alias: alias.to_string(),
                source,
            })
    }

    /// Returns `true` if an instance is stored under `alias`.
    pub fn exists(&self, alias: &str) -> bool {
        self.instances.read().contains_key(alias)
    }

    /// Snapshot of every alias and instance.
    pub fn list(&self) -> HashMap<String, T> {
        self.instances.read().clone()
    }

    /// Number of stored instances.
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    /// Removes every instance and runs each destroy hook.
    ///
    /// All hooks run even if some fail; failures are collected into
    /// [`RegistryError::Clear`].
    pub fn clear(&self) -> Result<(), RegistryError> {
        let drained: Vec<(String, T)> = self.instances.write().drain().collect();
        debug!(count = drained.len(), "clearing instances");

        let errors: Vec<RegistryError> = drained
            .into_iter()
            .filter_map(|(alias, instance)| {
                instance
                    .destroy()
                    .err()
                    .map(|source| RegistryError::Destroy { alias, source })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Clear {
                failed: errors.len(),
                errors,
            })
        }
    }
}

impl<T: Clone + Destroy> Default for InstanceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
