//! Admin record identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an admin record.
///
/// Identifiers are opaque strings. The seed accounts use short numeric ids
/// (`"1"` to `"4"`); records created at runtime get a UUID v4 so that rapid
/// creation can never produce two records with the same id.
///
/// # Example
///
/// ```rust
/// # use mineral_bridge_core::AdminId;
/// let seeded = AdminId::new("1");
/// let created = AdminId::generate();
///
/// assert_eq!(seeded.as_str(), "1");
/// assert_ne!(created, AdminId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(String);

impl AdminId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, collision-free identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdminId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AdminId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for AdminId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
