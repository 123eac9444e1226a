//! Core types for declared outputs.
//!
//! This module contains the leaf types used throughout the crate:
//! - The canonical output key
//! - Declaration options and the per-output configuration

mod config;
mod name;

pub use config::{OutputConfiguration, OutputOptions, REQUIRED};
pub use name::OutputName;
