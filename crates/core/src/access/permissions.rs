//! Role permission table.

use crate::types::Role;
use crate::types::permissions::{
    ALL, COMPLIANCE_READ, DISPUTES_READ, ENQUIRY_READ, ENQUIRY_WRITE, ESCROW_RESERVE,
    FINANCIAL_READ, LC_ISSUE, LOG_CREATE, LOG_UPDATE, ORDERS_READ, QR_SEND, QR_SENT_MARK,
    TRANSPORT_READ, USER_BASIC, USER_READ,
};

const CEO: &[&str] = &[ALL];

const OPERATIONS_MANAGER: &[&str] = &[
    "orders_*",
    FINANCIAL_READ,
    ESCROW_RESERVE,
    QR_SEND,
    LC_ISSUE,
    "transport_*",
    "enquiry_*",
    USER_READ,
    COMPLIANCE_READ,
    DISPUTES_READ,
    LOG_CREATE,
    LOG_UPDATE,
];

const SUPPORT_AGENT: &[&str] = &[
    ORDERS_READ,
    ENQUIRY_READ,
    ENQUIRY_WRITE,
    TRANSPORT_READ,
    USER_BASIC,
    COMPLIANCE_READ,
    DISPUTES_READ,
    LOG_CREATE,
];

const DATA_CLERK: &[&str] = &[
    ORDERS_READ,
    TRANSPORT_READ,
    LOG_CREATE,
    LOG_UPDATE,
    QR_SENT_MARK,
];

/// The grant list of `role`. `ceo` holds exactly `["*"]`.
#[must_use]
pub const fn permissions_of(role: Role) -> &'static [&'static str] {
    match role {
        Role::Ceo => CEO,
        Role::OperationsManager => OPERATIONS_MANAGER,
        Role::SupportAgent => SUPPORT_AGENT,
        Role::DataClerk => DATA_CLERK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Grant, permissions};

    #[test]
    fn test_ceo_holds_only_the_wildcard() {
        assert_eq!(permissions_of(Role::Ceo), &["*"]);
    }

    #[test]
    fn test_only_ceo_holds_the_wildcard() {
        for role in [Role::OperationsManager, Role::SupportAgent, Role::DataClerk] {
            assert!(!permissions_of(role).contains(&permissions::ALL), "{role}");
        }
    }

    #[test]
    fn test_entries_are_vocabulary_or_prefix_wildcards() {
        for role in Role::ALL {
            for entry in permissions_of(role) {
                let known = match Grant::parse(entry) {
                    Grant::All => true,
                    Grant::Prefix(prefix) => permissions::VOCABULARY
                        .iter()
                        .any(|token| Grant::Prefix(prefix).covers(token)),
                    Grant::Exact(token) => permissions::VOCABULARY.contains(&token),
                };
                assert!(known, "{role}: {entry}");
            }
        }
    }
}
