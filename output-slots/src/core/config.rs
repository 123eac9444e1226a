//! Output options and per-output configuration.

use super::OutputName;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the only option that currently changes behavior.
pub const REQUIRED: &str = "required";

/// Options attached to a declaration.
///
/// The recognized option is `required`. Any other keys are kept as given
/// and have no effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputOptions(Map<String, Value>);

impl OutputOptions {
    /// Creates an empty options map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options from an existing map.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Sets the `required` option.
    #[must_use]
    pub fn required(self, required: bool) -> Self {
        self.with_option(REQUIRED, Value::Bool(required))
    }

    /// Sets an arbitrary option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Whether the `required` option is set.
    ///
    /// Absent, `null` and `false` mean not required; anything else does.
    #[must_use]
    pub fn is_required(&self) -> bool {
        !matches!(self.0.get(REQUIRED), None | Some(Value::Null | Value::Bool(false)))
    }

    /// Gets a raw option value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for OutputOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Non-object values carry no options.
impl From<Value> for OutputOptions {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Immutable description of one declared output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputConfiguration {
    name: OutputName,
    options: OutputOptions,
}

impl OutputConfiguration {
    /// Creates a configuration for `name`.
    #[must_use]
    pub fn new(name: impl Into<OutputName>, options: impl Into<OutputOptions>) -> Self {
        Self {
            name: name.into(),
            options: options.into(),
        }
    }

    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &OutputName {
        &self.name
    }

    /// The options given at declaration.
    #[must_use]
    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    /// Whether validation fails when this output is unset.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.options.is_required()
    }
}
