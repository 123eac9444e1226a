//! # Output Slots
//!
//! Declared, validated named outputs for command objects.
//!
//! A host type declares which named values it promises to produce and marks
//! some of them as required. Each instance then writes values only under
//! declared names, and validation checks that every required output was set:
//!
//! - **Registry**: per-type table of output configurations, built once
//! - **Store**: per-instance table of written values
//! - **Validation**: required outputs must be present when the host asks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use output_slots::prelude::*;
//!
//! struct CreateUser {
//!     outputs: OutputStore,
//! }
//!
//! declare_outputs! {
//!     CreateUser {
//!         user, token => { "required": true };
//!         notice;
//!     }
//! }
//!
//! impl HasOutputs for CreateUser {
//!     fn output_store(&self) -> &OutputStore { &self.outputs }
//!     fn output_store_mut(&mut self) -> &mut OutputStore { &mut self.outputs }
//! }
//!
//! let mut op = CreateUser { outputs: CreateUser::setup_outputs() };
//! op.output("user", json!({"id": 1}))?;
//! op.output("token", "abc")?;
//! op.validate_outputs()?;
//! assert_eq!(op.user()?, Some(&json!({"id": 1})));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod host;
pub mod registry;
pub mod store;
pub mod testing;

pub use crate::core::{OutputConfiguration, OutputName, OutputOptions};
pub use crate::errors::{
    DeclarationError, MissingOutputsError, OutputError, OutputNotSetError, UnknownOutputError,
};
pub use crate::host::{DeclaresOutputs, HasOutputs};
pub use crate::registry::{DeclarationGroup, OutputAccessor, OutputDeclarations, OutputRegistry};
pub use crate::store::{OutputStore, SharedOutputStore};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;

    /// Return type of generated output readers.
    pub type OutputRead<'a> =
        Result<Option<&'a serde_json::Value>, crate::errors::UnknownOutputError>;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{OutputConfiguration, OutputName, OutputOptions};
    pub use crate::declare_outputs;
    pub use crate::errors::{OutputError, OutputNotSetError, UnknownOutputError};
    pub use crate::host::{DeclaresOutputs, HasOutputs};
    pub use crate::registry::OutputRegistry;
    pub use crate::store::{OutputStore, SharedOutputStore};
    pub use serde_json::json;
}
