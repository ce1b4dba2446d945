//! Administrative roles and the role catalog.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of the four role identifiers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid admin role: {0}")]
pub struct UnknownRole(pub String);

/// Admin role.
///
/// Variants are declared from most to least privileged. The set and its order
/// are fixed; [`Role::rank`] exposes the order for hierarchy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unrestricted access to every module and permission.
    Ceo,
    /// Runs day-to-day trading operations.
    OperationsManager,
    /// Handles buyer and miner enquiries.
    SupportAgent,
    /// Records data entries and logistics updates.
    DataClerk,
}

/// Display metadata for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
}

impl Role {
    /// Every role, most privileged first.
    pub const ALL: [Self; 4] = [
        Self::Ceo,
        Self::OperationsManager,
        Self::SupportAgent,
        Self::DataClerk,
    ];

    /// Position in the hierarchy; `0` is the most senior role.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Ceo => 0,
            Self::OperationsManager => 1,
            Self::SupportAgent => 2,
            Self::DataClerk => 3,
        }
    }

    /// Whether this role is at least as senior as `required`.
    #[must_use]
    pub const fn outranks_or_equals(self, required: Self) -> bool {
        self.rank() <= required.rank()
    }

    /// Stable identifier used in persisted records and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::OperationsManager => "operations_manager",
            Self::SupportAgent => "support_agent",
            Self::DataClerk => "data_clerk",
        }
    }

    /// Human-readable label shown in the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::OperationsManager => "Operations Manager",
            Self::SupportAgent => "Support Agent",
            Self::DataClerk => "Data Clerk",
        }
    }

    /// One-line summary of what the role is for.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ceo => "Full platform access including finance release, settings and admin management",
            Self::OperationsManager => {
                "Manages orders, escrow, logistics and buyer communication"
            }
            Self::SupportAgent => "Answers enquiries and follows up on orders and disputes",
            Self::DataClerk => "Logs order, testing and transport updates",
        }
    }

    /// Catalog entry for this role.
    #[must_use]
    pub const fn info(self) -> RoleInfo {
        RoleInfo {
            role: self,
            label: self.label(),
            description: self.description(),
        }
    }

    /// The full role catalog, most privileged first.
    #[must_use]
    pub fn catalog() -> [RoleInfo; 4] {
        Self::ALL.map(Self::info)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
