//! Error types for declared outputs.
//!
//! Every error here describes a programming or configuration mistake in the
//! host type. None of them are retried or recovered from internally.

use crate::core::OutputName;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

/// Stable error codes surfaced in diagnostics.
pub mod codes {
    /// A read or write named an output that was never declared.
    pub const UNKNOWN_OUTPUT: &str = "OUTPUT-001-UNKNOWN";
    /// A required output was not set when validation ran.
    pub const OUTPUT_NOT_SET: &str = "OUTPUT-002-NOT_SET";
    /// Several required outputs were not set when validation ran.
    pub const OUTPUTS_MISSING: &str = "OUTPUT-003-MISSING";
    /// A declaration document or output name was malformed.
    pub const DECLARATION: &str = "OUTPUT-004-DECLARATION";
}

/// The main error type for output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// An undeclared output was read or written.
    #[error("{0}")]
    UnknownOutput(#[from] UnknownOutputError),

    /// A required output was never written.
    #[error("{0}")]
    OutputNotSet(#[from] OutputNotSetError),

    /// One or more required outputs were never written.
    #[error("{0}")]
    MissingOutputs(#[from] MissingOutputsError),

    /// Declarations could not be built.
    #[error("{0}")]
    Declaration(#[from] DeclarationError),
}

impl OutputError {
    /// Returns the stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOutput(_) => codes::UNKNOWN_OUTPUT,
            Self::OutputNotSet(_) => codes::OUTPUT_NOT_SET,
            Self::MissingOutputs(_) => codes::OUTPUTS_MISSING,
            Self::Declaration(_) => codes::DECLARATION,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), json!(self.code()));
        map.insert("message".to_string(), json!(self.to_string()));

        match self {
            Self::UnknownOutput(err) => {
                map.insert("output".to_string(), json!(err.name));
            }
            Self::OutputNotSet(err) => {
                map.insert("output".to_string(), json!(err.name));
            }
            Self::MissingOutputs(err) => {
                map.insert("outputs".to_string(), json!(err.names));
            }
            Self::Declaration(_) => {}
        }

        map
    }
}

/// Error raised when reading or writing an output that was never declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown output '{name}'")]
pub struct UnknownOutputError {
    /// The offending name.
    pub name: OutputName,
}

impl UnknownOutputError {
    /// Creates a new unknown output error.
    #[must_use]
    pub fn new(name: impl Into<OutputName>) -> Self {
        Self { name: name.into() }
    }
}

/// Error raised by validation when a required output was never written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Output '{name}' was not set")]
pub struct OutputNotSetError {
    /// The missing output.
    pub name: OutputName,
}

impl OutputNotSetError {
    /// Creates a new output-not-set error.
    #[must_use]
    pub fn new(name: impl Into<OutputName>) -> Self {
        Self { name: name.into() }
    }
}

/// Aggregate form of [`OutputNotSetError`] listing every missing output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Outputs not set: {}", join_names(names))]
pub struct MissingOutputsError {
    /// Missing outputs, in declaration order.
    pub names: Vec<OutputName>,
}

impl MissingOutputsError {
    /// Creates a new aggregate error.
    #[must_use]
    pub fn new(names: Vec<OutputName>) -> Self {
        Self { names }
    }

    /// The first missing output, matching what single-error validation reports.
    #[must_use]
    pub fn first(&self) -> Option<OutputNotSetError> {
        self.names.first().cloned().map(OutputNotSetError::new)
    }
}

fn join_names(names: &[OutputName]) -> String {
    names
        .iter()
        .map(OutputName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while building declarations from names or documents.
#[derive(Debug, Error)]
pub enum DeclarationError {
    /// A name is not a valid output identifier.
    #[error("Invalid output name '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A declaration group listed no names.
    #[error("Declaration group {index} lists no output names")]
    EmptyGroup {
        /// Zero-based position of the group in the document.
        index: usize,
    },

    /// The document could not be parsed.
    #[error("Malformed output declarations: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeclarationError {
    /// Creates an invalid name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_output_message() {
        let err = UnknownOutputError::new("z");
        assert_eq!(err.to_string(), "Unknown output 'z'");
        assert_eq!(err.name, "z");
    }

    #[test]
    fn test_output_not_set_message() {
        let err = OutputNotSetError::new("b");
        assert_eq!(err.to_string(), "Output 'b' was not set");
    }

    #[test]
    fn test_missing_outputs_message() {
        let err = MissingOutputsError::new(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Outputs not set: a, b");
        assert_eq!(err.first(), Some(OutputNotSetError::new("a")));
    }

    #[test]
    fn test_output_error_to_dict() {
        let err: OutputError = UnknownOutputError::new("z").into();
        let dict = err.to_dict();

        assert_eq!(dict.get("code").unwrap(), codes::UNKNOWN_OUTPUT);
        assert_eq!(dict.get("output").unwrap(), "z");
        assert_eq!(dict.get("message").unwrap(), "Unknown output 'z'");
    }

    #[test]
    fn test_missing_outputs_to_dict() {
        let err: OutputError = MissingOutputsError::new(vec!["a".into()]).into();
        let dict = err.to_dict();

        assert_eq!(err.code(), codes::OUTPUTS_MISSING);
        assert_eq!(dict.get("outputs").unwrap(), &json!(["a"]));
    }

    #[test]
    fn test_declaration_error_code() {
        let err: OutputError = DeclarationError::invalid_name("1abc").into();
        assert_eq!(err.code(), codes::DECLARATION);
        assert!(err.to_string().contains("1abc"));
    }
}
