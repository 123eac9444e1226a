//! Per-type registry of declared outputs.
//!
//! A registry is built once, when its host type is first used, and then
//! shared read-only by every instance behind an `Arc`. A subtype starts from
//! a copy of its parent's registry via [`OutputRegistry::inherit`], so
//! declaring into the subtype never touches the parent.

mod accessor;
mod declarations;

pub use accessor::OutputAccessor;
pub use declarations::{DeclarationGroup, OutputDeclarations};

use crate::core::{OutputConfiguration, OutputName, OutputOptions};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Ordered table of output configurations for one host type.
///
/// Iteration follows first-declaration order. Redeclaring a name replaces
/// its configuration but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct OutputRegistry {
    owner: Option<Arc<str>>,
    configurations: IndexMap<OutputName, Arc<OutputConfiguration>>,
}

impl OutputRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty registry labelled with its host type.
    #[must_use]
    pub fn named(owner: impl AsRef<str>) -> Self {
        Self::new().with_owner(owner)
    }

    /// Starts a subtype's registry from a copy of `parent`'s table.
    ///
    /// The copy has no owner label; set one with [`Self::with_owner`].
    #[must_use]
    pub fn inherit(parent: &Self) -> Self {
        Self {
            owner: None,
            configurations: parent.configurations.clone(),
        }
    }

    /// Sets the owner label used in diagnostics.
    #[must_use]
    pub fn with_owner(mut self, owner: impl AsRef<str>) -> Self {
        self.owner = Some(Arc::from(owner.as_ref()));
        self
    }

    /// The host type this registry belongs to, if labelled.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Declares outputs sharing one set of options.
    ///
    /// Each name gets its own configuration built from `options`, replacing
    /// any earlier declaration of that name. Options are not merged with the
    /// replaced configuration. Declaring no names does nothing.
    ///
    /// Names are not validated here; use [`OutputName::parse`] or a
    /// declaration document when names come from untrusted input.
    pub fn declare_outputs<I>(&mut self, names: I, options: impl Into<OutputOptions>)
    where
        I: IntoIterator,
        I::Item: Into<OutputName>,
    {
        let options = options.into();
        for name in names {
            let name = name.into();
            let config = OutputConfiguration::new(name.clone(), options.clone());
            debug!(
                owner = self.owner().unwrap_or("<anonymous>"),
                output = %name,
                required = config.is_required(),
                "Output declared"
            );
            self.configurations.insert(name, Arc::new(config));
        }
    }

    /// Builder form of [`Self::declare_outputs`].
    #[must_use]
    pub fn with_outputs<I>(mut self, names: I, options: impl Into<OutputOptions>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OutputName>,
    {
        self.declare_outputs(names, options);
        self
    }

    /// Freezes the registry for sharing between instances.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Gets the configuration for a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<OutputConfiguration>> {
        self.configurations.get(name)
    }

    /// Checks whether a name was declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.configurations.contains_key(name)
    }

    /// Returns the number of declared outputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    /// Returns true if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &OutputName> {
        self.configurations.keys()
    }

    /// Configurations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OutputConfiguration> {
        self.configurations.values().map(|config| &**config)
    }

    /// Names declared as required, in declaration order.
    pub fn required_names(&self) -> impl Iterator<Item = &OutputName> {
        self.iter()
            .filter(|config| config.is_required())
            .map(OutputConfiguration::name)
    }

    /// Returns the reader for a declared name.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<OutputAccessor> {
        self.configurations
            .get_key_value(name)
            .map(|(name, _)| OutputAccessor::new(name.clone()))
    }

    /// Readers for every declared name, in declaration order.
    pub fn accessors(&self) -> impl Iterator<Item = OutputAccessor> + '_ {
        self.names().cloned().map(OutputAccessor::new)
    }
}
