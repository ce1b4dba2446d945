//! Access inspection commands.
//!
//! ```bash
//! # Does an operations manager hold orders_delete?
//! mb-cli access check -r operations_manager orders_delete
//!
//! # Does a data clerk rank at least as support_agent?
//! mb-cli access check -r data_clerk support_agent
//!
//! # Access level of a support agent in the finance module
//! mb-cli access module -r support_agent finance
//!
//! # Full module x role table
//! mb-cli access matrix
//! ```

use std::fmt::Write;

use mineral_bridge_core::access::modules;
use mineral_bridge_core::{AccessLevel, Module, Role, has_access, module_access_level};

/// Width of the module column in the matrix.
const MODULE_COLUMN: usize = 24;

/// Whether `role` satisfies `required` (a role name or a permission token).
pub fn check(role: Role, required: &str) -> bool {
    let granted = has_access(role, required);
    let kind = if required.parse::<Role>().is_ok() {
        "role"
    } else {
        "permission"
    };
    tracing::info!(
        "{} -> {} {}: {}",
        role.label(),
        kind,
        required,
        if granted { "granted" } else { "denied" }
    );
    granted
}

/// Access level of `role` in `module`.
pub fn module(role: Role, module: &str) -> AccessLevel {
    if module.parse::<Module>().is_err() {
        tracing::warn!("'{}' is not a registered module; CEO-only access applies", module);
    }
    let level = module_access_level(role, module);
    tracing::info!("{} -> {}: {}", role.label(), module, level);
    level
}

/// Render the module x role table.
pub fn matrix_lines() -> Vec<String> {
    let mut header = format!("{:<MODULE_COLUMN$}", "module");
    for role in Role::ALL {
        let _ = write!(header, " {:<20}", role.as_str());
    }

    let mut lines = vec![header.trim_end().to_owned()];
    for module in Module::ALL {
        let policy = modules::policy(module);
        let mut line = format!("{:<MODULE_COLUMN$}", module.as_str());
        for role in Role::ALL {
            let _ = write!(line, " {:<20}", modules::level_in(policy, role).as_str());
        }
        lines.push(line.trim_end().to_owned());
    }
    lines
}

/// Log the module x role table.
pub fn matrix() {
    for line in matrix_lines() {
        tracing::info!("{}", line);
    }
}
