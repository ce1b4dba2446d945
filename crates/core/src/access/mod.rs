//! Static access tables and the decisions built on them.
//!
//! - [`modules`] - per-module access levels for each role
//! - [`permissions`] - per-role permission grant lists
//! - [`resolver`] - module visibility, permission matching and the role
//!   hierarchy check
//!
//! Everything here is a pure lookup over `'static` data.

pub mod modules;
pub mod permissions;
pub mod resolver;

pub use modules::{ModulePolicy, UNREGISTERED_POLICY};
pub use permissions::permissions_of;
pub use resolver::{
    has_access, has_minimum_access, has_module_access, has_permission, module_access_level,
    role_label, visible_modules,
};
