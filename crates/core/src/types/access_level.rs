//! Per-module access levels.

use serde::{Deserialize, Serialize};

/// How much a role may do inside a module.
///
/// Variants are declared in increasing order so the derived `Ord` gives
/// `None < Log < View < Full`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// The module is hidden.
    #[default]
    None,
    /// May append log entries (minimal write) without browsing.
    Log,
    /// Read-only.
    View,
    /// Read, write and trigger actions.
    Full,
}

impl AccessLevel {
    /// Every level, least access first.
    pub const ALL: [Self; 4] = [Self::None, Self::Log, Self::View, Self::Full];

    /// Whether the module shows up at all.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Log => "log",
            Self::View => "view",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
