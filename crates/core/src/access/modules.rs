//! Module access table.
//!
//! Maps every registered [`Module`] to the access level each role holds in
//! it. Policies may be partial: a role missing from a module's policy has
//! [`AccessLevel::None`] there. A module id that is not registered at all
//! resolves to [`UNREGISTERED_POLICY`], which opens it to the CEO only.

use crate::types::{AccessLevel, Module, Role};

use AccessLevel::{Full, Log, View};
use Role::{Ceo, DataClerk, OperationsManager, SupportAgent};

/// Per-role access levels of one module.
pub type ModulePolicy = &'static [(Role, AccessLevel)];

/// Policy applied to module ids missing from the table.
pub const UNREGISTERED_POLICY: ModulePolicy = &[(Ceo, Full)];

/// The configured policy of a registered module.
#[must_use]
pub const fn policy(module: Module) -> ModulePolicy {
    match module {
        Module::Dashboard => &[
            (Ceo, Full),
            (OperationsManager, Full),
            (SupportAgent, View),
            (DataClerk, View),
        ],
        Module::Users => &[(Ceo, Full), (OperationsManager, View), (SupportAgent, View)],
        Module::Minerals | Module::Orders | Module::Logistics => &[
            (Ceo, Full),
            (OperationsManager, Full),
            (SupportAgent, View),
            (DataClerk, Log),
        ],
        Module::Enquiries => &[
            (Ceo, Full),
            (OperationsManager, Full),
            (SupportAgent, Full),
            (DataClerk, Log),
        ],
        Module::Finance
        | Module::FinanceTransactions
        | Module::FinanceLcIssued
        | Module::Analytics
        | Module::Partners
        | Module::Insurance
        | Module::MinerDashboard
        | Module::SellMinerals => &[(Ceo, Full), (OperationsManager, View)],
        Module::FinanceSendQr | Module::FinanceTesting => {
            &[(Ceo, Full), (OperationsManager, Full), (DataClerk, Log)]
        }
        Module::FinanceCallBuyer => &[(Ceo, Full), (OperationsManager, Full), (SupportAgent, Log)],
        Module::FinanceReserveEscrow => &[(Ceo, Full), (OperationsManager, Full)],
        Module::FinanceRelease | Module::Settings => &[(Ceo, Full)],
        Module::Content | Module::Disputes => {
            &[(Ceo, Full), (OperationsManager, Full), (SupportAgent, View)]
        }
        Module::Compliance => &[(Ceo, Full), (OperationsManager, View), (SupportAgent, View)],
    }
}

/// Resolve a raw module id to its policy, falling back to
/// [`UNREGISTERED_POLICY`] for ids outside the catalog.
#[must_use]
pub fn resolve(module: &str) -> ModulePolicy {
    module.parse::<Module>().map_or(UNREGISTERED_POLICY, policy)
}

/// Look up `role` in a policy, defaulting to [`AccessLevel::None`].
#[must_use]
pub fn level_in(policy: ModulePolicy, role: Role) -> AccessLevel {
    policy
        .iter()
        .find_map(|&(r, level)| (r == role).then_some(level))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceo_has_full_access_to_every_registered_module() {
        for module in Module::ALL {
            assert_eq!(level_in(policy(module), Ceo), Full, "{module}");
        }
    }

    #[test]
    fn test_policies_list_each_role_once() {
        for module in Module::ALL {
            let roles: Vec<Role> = policy(module).iter().map(|&(r, _)| r).collect();
            let unique: std::collections::HashSet<Role> = roles.iter().copied().collect();
            assert_eq!(roles.len(), unique.len(), "{module}");
        }
    }

    #[test]
    fn test_policies_never_store_none() {
        for module in Module::ALL {
            assert!(
                policy(module)
                    .iter()
                    .all(|&(_, level)| level != AccessLevel::None),
                "{module}"
            );
        }
    }

    #[test]
    fn test_resolve_unknown_module_is_ceo_only() {
        let fallback = resolve("treasury");
        assert_eq!(fallback, UNREGISTERED_POLICY);
        assert_eq!(level_in(fallback, Ceo), Full);
        assert_eq!(level_in(fallback, OperationsManager), AccessLevel::None);
    }

    #[test]
    fn test_resolve_known_module() {
        assert_eq!(resolve("orders"), policy(Module::Orders));
        assert_eq!(level_in(resolve("orders"), OperationsManager), Full);
        assert_eq!(level_in(resolve("finance"), DataClerk), AccessLevel::None);
    }
}
