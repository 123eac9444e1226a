//! Thread-safe handle around an output store.

use super::OutputStore;
use crate::core::OutputName;
use crate::errors::{MissingOutputsError, OutputNotSetError, UnknownOutputError};
use crate::registry::OutputRegistry;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A cloneable, lock-guarded [`OutputStore`].
///
/// Clones share the same store. Reads return owned values since a reference
/// cannot outlive the read guard.
#[derive(Debug, Clone)]
pub struct SharedOutputStore {
    inner: Arc<RwLock<OutputStore>>,
}

impl SharedOutputStore {
    /// Creates an empty shared store bound to `registry`.
    #[must_use]
    pub fn new(registry: Arc<OutputRegistry>) -> Self {
        Self::from_store(OutputStore::new(registry))
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: OutputStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Writes an output. See [`OutputStore::output`].
    pub fn output(
        &self,
        name: impl Into<OutputName>,
        value: impl Into<Value>,
    ) -> Result<(), UnknownOutputError> {
        self.inner.write().output(name, value)
    }

    /// Reads a copy of an output. See [`OutputStore::get_output`].
    pub fn get_output(&self, name: impl AsRef<str>) -> Result<Option<Value>, UnknownOutputError> {
        self.inner.read().get_output(name).map(|value| value.cloned())
    }

    /// See [`OutputStore::is_set`].
    pub fn is_set(&self, name: impl AsRef<str>) -> Result<bool, UnknownOutputError> {
        self.inner.read().is_set(name)
    }

    /// See [`OutputStore::validate_outputs`].
    pub fn validate_outputs(&self) -> Result<(), OutputNotSetError> {
        self.inner.read().validate_outputs()
    }

    /// See [`OutputStore::validate_all_outputs`].
    pub fn validate_all_outputs(&self) -> Result<(), MissingOutputsError> {
        self.inner.read().validate_all_outputs()
    }

    /// Returns a copy of all written outputs.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        self.inner.read().to_dict()
    }

    /// Returns a copy of the current store.
    #[must_use]
    pub fn snapshot(&self) -> OutputStore {
        self.inner.read().clone()
    }

    /// Unwraps the store if this is the last handle.
    ///
    /// Returns `self` unchanged when other clones are still alive.
    pub fn try_into_inner(self) -> Result<OutputStore, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutputOptions;
    use serde_json::json;
    use std::thread;

    fn registry() -> Arc<OutputRegistry> {
        OutputRegistry::named("Shared")
            .with_outputs(["a", "b"], OutputOptions::new().required(true))
            .into_shared()
    }

    #[test]
    fn test_clones_share_state() {
        let store = SharedOutputStore::new(registry());
        let other = store.clone();

        store.output("a", 1).unwrap();
        assert_eq!(other.get_output("a").unwrap(), Some(json!(1)));
        assert!(other.is_set("a").unwrap());
    }

    #[test]
    fn test_unknown_output_rejected() {
        let store = SharedOutputStore::new(registry());
        let err = store.output("z", "v").unwrap_err();
        assert_eq!(err, UnknownOutputError::new("z"));
        assert!(store.get_output("z").is_err());
    }

    #[test]
    fn test_writes_from_threads() {
        let store = SharedOutputStore::new(registry());

        let handles: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|name| {
                let store = store.clone();
                thread::spawn(move || store.output(name, name))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert!(store.validate_outputs().is_ok());
        assert_eq!(store.to_dict().len(), 2);
    }

    #[test]
    fn test_validation_through_handle() {
        let store = SharedOutputStore::new(registry());
        store.output("a", 1).unwrap();

        assert_eq!(store.validate_outputs().unwrap_err(), OutputNotSetError::new("b"));
        assert_eq!(
            store.validate_all_outputs().unwrap_err().names,
            vec![OutputName::new("b")]
        );
    }

    #[test]
    fn test_try_into_inner() {
        let store = SharedOutputStore::new(registry());
        store.output("a", 1).unwrap();

        let other = store.clone();
        let store = store.try_into_inner().unwrap_err();
        drop(other);

        let inner = store.try_into_inner().unwrap();
        assert_eq!(inner.get_output("a").unwrap(), Some(&json!(1)));
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = SharedOutputStore::new(registry());
        store.output("a", 1).unwrap();

        let snapshot = store.snapshot();
        store.output("b", 2).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.to_dict().len(), 2);
    }
}
