//! Admin account status.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not `Active` or `Inactive`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid admin status: {0}")]
pub struct UnknownStatus(pub String);

/// Whether an admin account may sign in.
///
/// Serialized capitalized (`"Active"`, `"Inactive"`), matching the persisted
/// admin blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AdminStatus {
    #[default]
    Active,
    Inactive,
}

impl AdminStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdminStatus {
    type Err = UnknownStatus;

    /// Accepts either casing so command-line input like `inactive` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("active") {
            Ok(Self::Active)
        } else if s.eq_ignore_ascii_case("inactive") {
            Ok(Self::Inactive)
        } else {
            Err(UnknownStatus(s.to_owned()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_is_capitalized() {
        assert_eq!(
            serde_json::to_string(&AdminStatus::Inactive).unwrap(),
            "\"Inactive\""
        );
        let status: AdminStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(status, AdminStatus::Active);
        assert!(serde_json::from_str::<AdminStatus>("\"active\"").is_err());
    }

    #[test]
    fn test_from_str_any_case() {
        assert_eq!("inactive".parse::<AdminStatus>(), Ok(AdminStatus::Inactive));
        assert_eq!("ACTIVE".parse::<AdminStatus>(), Ok(AdminStatus::Active));
        assert!("suspended".parse::<AdminStatus>().is_err());
    }
}
