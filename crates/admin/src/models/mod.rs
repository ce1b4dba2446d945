//! Domain models for admin accounts.

pub mod admin_user;
pub mod credential;

pub use admin_user::{AdminRecord, AdminUpdate, AdminUser, NewAdmin};
pub use credential::PasswordDigest;
