//! Per-instance storage of produced outputs.
//!
//! This module provides:
//! - [`OutputStore`], the owned store one host instance writes into
//! - [`SharedOutputStore`], a lock-guarded handle for instances shared across threads

mod shared;

pub use shared::SharedOutputStore;

use crate::core::OutputName;
use crate::errors::{MissingOutputsError, OutputNotSetError, UnknownOutputError};
use crate::registry::OutputRegistry;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

/// Values written by one host instance.
///
/// Only names declared in the bound registry can be written or read. A
/// written value stays until overwritten; the store never shrinks.
#[derive(Debug, Clone)]
pub struct OutputStore {
    registry: Arc<OutputRegistry>,
    values: IndexMap<OutputName, Value>,
}

impl OutputStore {
    /// Creates an empty store bound to `registry`.
    #[must_use]
    pub fn new(registry: Arc<OutputRegistry>) -> Self {
        Self {
            registry,
            values: IndexMap::new(),
        }
    }

    /// The registry this store enforces.
    #[must_use]
    pub fn registry(&self) -> &Arc<OutputRegistry> {
        &self.registry
    }

    /// Writes an output, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOutputError` if `name` was not declared.
    pub fn output(
        &mut self,
        name: impl Into<OutputName>,
        value: impl Into<Value>,
    ) -> Result<(), UnknownOutputError> {
        let name = self.check_declared(name.into())?;
        trace!(owner = self.owner(), output = %name, "Output written");
        self.values.insert(name, value.into());
        Ok(())
    }

    /// Reads an output.
    ///
    /// Returns `Ok(None)` for a declared output that has not been written.
    /// An explicitly written `null` is returned as `Some(&Value::Null)`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOutputError` if `name` was not declared.
    pub fn get_output(&self, name: impl AsRef<str>) -> Result<Option<&Value>, UnknownOutputError> {
        let name = name.as_ref();
        if !self.registry.contains(name) {
            return Err(self.unknown(OutputName::new(name)));
        }
        Ok(self.values.get(name))
    }

    /// Checks whether a declared output has been written.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOutputError` if `name` was not declared.
    pub fn is_set(&self, name: impl AsRef<str>) -> Result<bool, UnknownOutputError> {
        self.get_output(name).map(|value| value.is_some())
    }

    /// Checks that every required output has been written.
    ///
    /// Presence is what counts: a required output written as `null` passes.
    ///
    /// # Errors
    ///
    /// Returns `OutputNotSetError` for the first required output, in
    /// declaration order, that was never written.
    pub fn validate_outputs(&self) -> Result<(), OutputNotSetError> {
        match self.unset_required().next() {
            Some(name) => {
                warn!(owner = self.owner(), output = %name, "Required output not set");
                Err(OutputNotSetError::new(name))
            }
            None => Ok(()),
        }
    }

    /// Like [`Self::validate_outputs`] but reports every missing output.
    ///
    /// # Errors
    ///
    /// Returns `MissingOutputsError` listing all unset required outputs.
    pub fn validate_all_outputs(&self) -> Result<(), MissingOutputsError> {
        let missing = self.missing_required_outputs();
        if missing.is_empty() {
            return Ok(());
        }
        warn!(owner = self.owner(), outputs = ?missing, "Required outputs not set");
        Err(MissingOutputsError::new(missing))
    }

    /// Required outputs not yet written, in declaration order.
    #[must_use]
    pub fn missing_required_outputs(&self) -> Vec<OutputName> {
        self.unset_required().cloned().collect()
    }

    /// Returns the number of written outputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Written names, in first-write order.
    pub fn names(&self) -> impl Iterator<Item = &OutputName> {
        self.values.keys()
    }

    /// Written outputs, in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&OutputName, &Value)> {
        self.values.iter()
    }

    /// Returns a copy of all written outputs.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        self.values
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    /// Consumes the store, returning the written outputs.
    #[must_use]
    pub fn into_values(self) -> IndexMap<OutputName, Value> {
        self.values
    }

    fn unset_required(&self) -> impl Iterator<Item = &OutputName> {
        self.registry
            .required_names()
            .filter(|name| !self.values.contains_key(name.as_str()))
    }

    fn check_declared(&self, name: OutputName) -> Result<OutputName, UnknownOutputError> {
        if self.registry.contains(name.as_str()) {
            Ok(name)
        } else {
            Err(self.unknown(name))
        }
    }

    fn unknown(&self, name: OutputName) -> UnknownOutputError {
        warn!(owner = self.owner(), output = %name, "Unknown output");
        UnknownOutputError::new(name)
    }

    fn owner(&self) -> &str {
        self.registry.owner().unwrap_or("<anonymous>")
    }
}
