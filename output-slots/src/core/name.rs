//! Canonical output keys.

use crate::errors::DeclarationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::{Arc, OnceLock};

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*[?!]?$";

static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("invalid regex pattern"))
}

/// The canonical key for a declared output.
///
/// Every public operation converts its name argument into an `OutputName`
/// first, so `"user"`, `String::from("user")` and an existing `OutputName`
/// all address the same slot. Cloning is cheap.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputName(Arc<str>);

impl OutputName {
    /// Creates a name without validating its shape.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Creates a name, rejecting anything that is not an identifier.
    ///
    /// Identifiers start with a letter or underscore, continue with letters,
    /// digits or underscores, and may end in a single `?` or `!`.
    pub fn parse(name: &str) -> Result<Self, DeclarationError> {
        if identifier_regex().is_match(name) {
            Ok(Self::new(name))
        } else {
            Err(DeclarationError::invalid_name(name))
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OutputName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OutputName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OutputName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for OutputName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&String> for OutputName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&OutputName> for OutputName {
    fn from(name: &OutputName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for OutputName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for OutputName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
