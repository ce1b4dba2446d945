//! Core types for Mineral Bridge access control.
//!
//! This module provides type-safe wrappers for the access-control vocabulary.

pub mod access_level;
pub mod email;
pub mod id;
pub mod module;
pub mod permission;
pub mod role;
pub mod status;

pub use access_level::AccessLevel;
pub use email::{Email, EmailError};
pub use id::AdminId;
pub use module::{Module, UnknownModule};
pub use permission::{Grant, permissions};
pub use role::{Role, RoleInfo, UnknownRole};
pub use status::{AdminStatus, UnknownStatus};
