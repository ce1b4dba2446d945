//! Access decisions.
//!
//! Every function takes the caller's role as `impl Into<Option<Role>>`, so
//! both `Role::SupportAgent` and `None` (no one signed in) are accepted.
//! Without a role each predicate returns its most restrictive answer.

use tracing::trace;

use super::modules::{self, level_in};
use super::permissions::permissions_of;
use crate::types::{AccessLevel, Grant, Module, Role, permissions};

/// Whether `role` can see `module` at all.
#[must_use]
pub fn has_module_access(role: impl Into<Option<Role>>, module: &str) -> bool {
    module_access_level(role, module).is_visible()
}

/// The exact access level of `role` in `module`.
///
/// Unregistered module ids resolve to CEO-only access.
#[must_use]
pub fn module_access_level(role: impl Into<Option<Role>>, module: &str) -> AccessLevel {
    let Some(role) = role.into() else {
        return AccessLevel::None;
    };
    level_in(modules::resolve(module), role)
}

/// Whether `role` holds at least `minimum` in `module`.
#[must_use]
pub fn has_minimum_access(
    role: impl Into<Option<Role>>,
    module: &str,
    minimum: AccessLevel,
) -> bool {
    module_access_level(role, module) >= minimum
}

/// Registered modules visible to `role`, in catalog order.
#[must_use]
pub fn visible_modules(role: impl Into<Option<Role>>) -> Vec<Module> {
    let Some(role) = role.into() else {
        return Vec::new();
    };
    Module::ALL
        .into_iter()
        .filter(|module| level_in(modules::policy(*module), role).is_visible())
        .collect()
}

/// Whether `role` holds the permission `token`.
///
/// Matching order:
/// 1. a role holding `*` is granted everything
/// 2. asking for `*` itself is granted to **every** role
/// 3. an exact entry grants the token
/// 4. an entry `<prefix>_*` grants the token if `<prefix>` is the part of the
///    token before its first underscore
///
/// Rule 2 means `has_permission(Role::DataClerk, "*")` is `true`. Callers must
/// never use `"*"` as a gate for privileged actions.
#[must_use]
pub fn has_permission(role: impl Into<Option<Role>>, token: &str) -> bool {
    let Some(role) = role.into() else {
        return false;
    };
    let grants = permissions_of(role);

    if grants.contains(&permissions::ALL) || token == permissions::ALL {
        return true;
    }

    grants
        .iter()
        .map(|entry| Grant::parse(entry))
        .any(|grant| grant.covers(token))
}

/// Unified gate: a role identifier triggers a hierarchy check, anything else
/// is treated as a permission token.
///
/// `has_access(Role::OperationsManager, "support_agent")` is `true` because an
/// operations manager is at least as senior as a support agent.
#[must_use]
pub fn has_access(role: impl Into<Option<Role>>, required: &str) -> bool {
    let Some(role) = role.into() else {
        return false;
    };

    let granted = match required.parse::<Role>() {
        Ok(required_role) => role.outranks_or_equals(required_role),
        Err(_) => has_permission(role, required),
    };
    trace!(%role, required, granted, "access check");
    granted
}

/// Display label of `role`.
#[must_use]
pub const fn role_label(role: Role) -> &'static str {
    role.label()
}
