//! Role label set type.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comma-joined set of role labels, e.g. `USER` or `USER,ADMIN`.
///
/// No enumeration is enforced beyond the set being non-blank; the
/// authorisation layer interprets the labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roles(String);

impl Roles {
    /// Creates a validated role label set.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyRoles`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(UserDomainError::EmptyRoles);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the raw comma-joined label string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the individual role labels, trimmed, skipping blanks.
    #[must_use]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|s| !s.is_empty())
    }
}

impl AsRef<str> for Roles {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
