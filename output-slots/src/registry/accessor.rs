//! Named readers for declared outputs.

use crate::core::OutputName;
use crate::errors::UnknownOutputError;
use crate::store::OutputStore;

/// Reader bound to one declared output.
///
/// Reading through an accessor is the same as calling
/// [`OutputStore::get_output`] with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputAccessor {
    name: OutputName,
}

impl OutputAccessor {
    pub(crate) fn new(name: OutputName) -> Self {
        Self { name }
    }

    /// The output this accessor reads.
    #[must_use]
    pub fn name(&self) -> &OutputName {
        &self.name
    }

    /// Reads the output from `store`.
    pub fn read<'s>(
        &self,
        store: &'s OutputStore,
    ) -> Result<Option<&'s serde_json::Value>, UnknownOutputError> {
        store.get_output(&self.name)
    }
}
