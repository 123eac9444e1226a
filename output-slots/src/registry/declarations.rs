//! Output declarations supplied as data.
//!
//! A declaration document lists groups of names that share options:
//!
//! ```json
//! {
//!   "owner": "CreateUser",
//!   "outputs": [
//!     { "names": ["user", "token"], "options": { "required": true } },
//!     { "names": ["notice"] }
//!   ]
//! }
//! ```

use super::OutputRegistry;
use crate::core::{OutputName, OutputOptions};
use crate::errors::DeclarationError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One `declare_outputs` call expressed as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarationGroup {
    /// Names declared by this group.
    pub names: Vec<String>,
    /// Options shared by every name in the group.
    #[serde(default)]
    pub options: OutputOptions,
}

impl DeclarationGroup {
    /// Creates a group.
    #[must_use]
    pub fn new<I, S>(names: I, options: OutputOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            options,
        }
    }
}

/// A full declaration document for one host type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputDeclarations {
    /// Label for the host type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Declaration groups, applied in order.
    #[serde(default)]
    pub outputs: Vec<DeclarationGroup>,
}

impl OutputDeclarations {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the owner label.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Appends a group.
    #[must_use]
    pub fn with_group(mut self, group: DeclarationGroup) -> Self {
        self.outputs.push(group);
        self
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, DeclarationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DeclarationError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a JSON document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeclarationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks every group and name without building anything.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        for (index, group) in self.outputs.iter().enumerate() {
            if group.names.is_empty() {
                return Err(DeclarationError::EmptyGroup { index });
            }
            for name in &group.names {
                OutputName::parse(name)?;
            }
        }
        Ok(())
    }
}

impl OutputRegistry {
    /// Builds a registry from a declaration document.
    pub fn from_declarations(declarations: &OutputDeclarations) -> Result<Self, DeclarationError> {
        let mut registry = declarations
            .owner
            .as_deref()
            .map_or_else(Self::new, Self::named);
        registry.apply_declarations(declarations)?;
        Ok(registry)
    }

    /// Applies a declaration document on top of this registry.
    ///
    /// The document is validated in full first, so a bad group leaves the
    /// registry untouched.
    pub fn apply_declarations(
        &mut self,
        declarations: &OutputDeclarations,
    ) -> Result<(), DeclarationError> {
        declarations.validate()?;
        for group in &declarations.outputs {
            self.declare_outputs(&group.names, group.options.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const DOCUMENT: &str = r#"{
        "owner": "CreateUser",
        "outputs": [
            { "names": ["user", "token"], "options": { "required": true } },
            { "names": ["notice"] }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let declarations = OutputDeclarations::from_json_str(DOCUMENT).unwrap();
        assert_eq!(declarations.owner.as_deref(), Some("CreateUser"));
        assert_eq!(declarations.outputs.len(), 2);
        assert_eq!(declarations.outputs[1].options, OutputOptions::new());
    }

    #[test]
    fn test_registry_from_declarations() {
        let declarations = OutputDeclarations::from_json_str(DOCUMENT).unwrap();
        let registry = OutputRegistry::from_declarations(&declarations).unwrap();

        assert_eq!(registry.owner(), Some("CreateUser"));
        let required: Vec<_> = registry.required_names().map(OutputName::as_str).collect();
        assert_eq!(required, vec!["user", "token"]);
        assert!(registry.contains("notice"));
    }

    #[test]
    fn test_builder_matches_document() {
        let built = OutputDeclarations::new()
            .with_owner("CreateUser")
            .with_group(DeclarationGroup::new(["user", "token"], OutputOptions::new().required(true)))
            .with_group(DeclarationGroup::new(["notice"], OutputOptions::new()));

        assert_eq!(built, OutputDeclarations::from_json_str(DOCUMENT).unwrap());
    }

    #[test]
    fn test_invalid_name_leaves_registry_untouched() {
        let declarations = OutputDeclarations::new()
            .with_group(DeclarationGroup::new(["fine"], OutputOptions::new()))
            .with_group(DeclarationGroup::new(["not valid"], OutputOptions::new()));

        let mut registry = OutputRegistry::new();
        let err = registry.apply_declarations(&declarations).unwrap_err();

        assert!(matches!(err, DeclarationError::InvalidName { ref name } if name == "not valid"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_group_rejected() {
        let declarations = OutputDeclarations::from_json_str(r#"{"outputs": [{"names": []}]}"#).unwrap();
        let err = OutputRegistry::from_declarations(&declarations).unwrap_err();
        assert!(matches!(err, DeclarationError::EmptyGroup { index: 0 }));
    }

    #[test]
    fn test_malformed_json() {
        let err = OutputDeclarations::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DeclarationError::Parse(_)));
    }

    #[test]
    fn test_apply_onto_inherited_registry() {
        let parent = OutputRegistry::new().with_outputs(["user"], OutputOptions::new());
        let declarations = OutputDeclarations::new()
            .with_group(DeclarationGroup::new(["user"], OutputOptions::new().required(true)));

        let mut child = OutputRegistry::inherit(&parent);
        child.apply_declarations(&declarations).unwrap();

        assert!(child.get("user").unwrap().is_required());
        assert!(!parent.get("user").unwrap().is_required());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let declarations = OutputDeclarations::from_path(file.path()).unwrap();
        assert_eq!(declarations.outputs.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OutputDeclarations::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DeclarationError::Io(_)));
    }

    #[test]
    fn test_from_reader() {
        let declarations = OutputDeclarations::from_reader(DOCUMENT.as_bytes()).unwrap();
        assert_eq!(declarations.owner.as_deref(), Some("CreateUser"));
    }
}
