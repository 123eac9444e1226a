//! Host-side traits for types that produce declared outputs.
//!
//! A host type gets its registry through [`DeclaresOutputs`] (usually
//! generated by [`declare_outputs!`](crate::declare_outputs)) and exposes its
//! per-instance store through [`HasOutputs`]. The host decides when to call
//! [`HasOutputs::validate_outputs`].

mod macros;

use crate::core::OutputName;
use crate::errors::{MissingOutputsError, OutputNotSetError, UnknownOutputError};
use crate::registry::OutputRegistry;
use crate::store::OutputStore;
use serde_json::Value;
use std::sync::Arc;

/// Type-level access to a host's declared outputs.
pub trait DeclaresOutputs {
    /// Returns the registry shared by every instance of this type.
    fn output_registry() -> Arc<OutputRegistry>;
}

/// Instance-level output API for a host type.
///
/// Implementors only provide access to the store created by
/// [`HasOutputs::setup_outputs`]; everything else has a default.
///
/// ```rust,ignore
/// struct CreateUser {
///     outputs: OutputStore,
/// }
///
/// declare_outputs! {
///     CreateUser {
///         user, token => { "required": true };
///         notice;
///     }
/// }
///
/// impl HasOutputs for CreateUser {
///     fn output_store(&self) -> &OutputStore {
///         &self.outputs
///     }
///
///     fn output_store_mut(&mut self) -> &mut OutputStore {
///         &mut self.outputs
///     }
/// }
/// ```
pub trait HasOutputs: DeclaresOutputs {
    /// The instance's store.
    fn output_store(&self) -> &OutputStore;

    /// The instance's store, mutably.
    fn output_store_mut(&mut self) -> &mut OutputStore;

    /// Creates the empty store an instance must own before writing outputs.
    #[must_use]
    fn setup_outputs() -> OutputStore {
        OutputStore::new(Self::output_registry())
    }

    /// Writes an output. See [`OutputStore::output`].
    fn output(
        &mut self,
        name: impl Into<OutputName>,
        value: impl Into<Value>,
    ) -> Result<(), UnknownOutputError> {
        self.output_store_mut().output(name, value)
    }

    /// Reads an output. See [`OutputStore::get_output`].
    fn get_output(&self, name: impl AsRef<str>) -> Result<Option<&Value>, UnknownOutputError> {
        self.output_store().get_output(name)
    }

    /// Checks required outputs. See [`OutputStore::validate_outputs`].
    fn validate_outputs(&self) -> Result<(), OutputNotSetError> {
        self.output_store().validate_outputs()
    }

    /// Checks required outputs, reporting all missing ones.
    fn validate_all_outputs(&self) -> Result<(), MissingOutputsError> {
        self.output_store().validate_all_outputs()
    }
}
