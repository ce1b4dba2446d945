//! Mineral Bridge Core - Roles, access tables and authorization rules.
//!
//! This crate provides the decision logic shared by every Mineral Bridge
//! admin component:
//! - `admin` - Admin registry, credential checks and sessions
//! - `cli` - Command-line tools for managing admins and inspecting access
//!
//! # Architecture
//!
//! The core crate contains only types, static tables and pure functions - no
//! I/O, no persistence, no clocks. Every lookup is a side-effect-free read of
//! `'static` data, so it can be called from anywhere without locking.
//!
//! # Modules
//!
//! - [`types`] - Roles, access levels, module ids, permission tokens, emails and IDs
//! - [`access`] - The module access table, the permission table and the resolver

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod types;

pub use access::{
    has_access, has_minimum_access, has_module_access, has_permission, module_access_level,
    permissions_of, role_label, visible_modules,
};
pub use types::*;
