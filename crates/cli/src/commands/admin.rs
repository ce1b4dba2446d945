//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # List admins
//! mb-cli admin list
//!
//! # Create an admin (password may come from MB_ADMIN_PASSWORD instead)
//! mb-cli admin create -e grace@mineralbridge.com -n "Grace Okafor" -r operations_manager --password ...
//!
//! # Deactivate an admin
//! mb-cli admin update 4 --status inactive
//!
//! # Remove an admin
//! mb-cli admin remove 4
//! ```
//!
//! # Environment Variables
//!
//! - `MB_ADMIN_STORE_DIR` - Directory holding the admin store
//! - `MB_ADMIN_PASSWORD` - Password fallback for `create`

use mineral_bridge_admin::{AdminRegistry, AdminUpdate, AdminUser, NewAdmin};
use mineral_bridge_core::{AdminId, AdminStatus, Email, Role};
use secrecy::SecretString;

use super::CliError;

/// Fields accepted by `admin update`.
#[derive(Debug, Default)]
pub struct UpdateFields {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub role: Option<Role>,
    pub status: Option<AdminStatus>,
    pub password: Option<String>,
}

/// Log every admin account.
pub fn list(registry: &AdminRegistry) -> Vec<AdminUser> {
    let admins = registry.list();
    tracing::info!("{} admin account(s)", admins.len());
    for admin in &admins {
        tracing::info!(
            "  {}  {} <{}>  {}  {}",
            admin.id,
            admin.name,
            admin.email,
            admin.role.label(),
            admin.status
        );
    }
    admins
}

/// Create a new admin account.
///
/// # Arguments
///
/// * `email` - Admin's email address
/// * `name` - Admin's display name
/// * `role` - Admin's role
/// * `password` - Cleartext password; required
///
/// # Returns
///
/// The created admin, without credentials.
pub fn create(
    registry: &AdminRegistry,
    email: Email,
    name: &str,
    role: Role,
    password: Option<String>,
) -> Result<AdminUser, CliError> {
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or(CliError::MissingPassword)?;

    if registry
        .list()
        .iter()
        .any(|admin| admin.email.matches(email.as_str()))
    {
        tracing::warn!("Another admin already uses {}", email);
    }

    let admin = registry.add(NewAdmin {
        name: name.to_owned(),
        email,
        password: SecretString::from(password),
        role,
    })?;

    tracing::info!(
        "Admin created successfully! ID: {}, Email: {}, Role: {}",
        admin.id,
        admin.email,
        admin.role.label()
    );
    Ok(admin)
}

/// Update an admin account. Only the supplied fields change.
pub fn update(
    registry: &AdminRegistry,
    id: &str,
    fields: UpdateFields,
) -> Result<AdminUser, CliError> {
    let id = AdminId::new(id);
    let mut update = AdminUpdate {
        name: fields.name,
        email: fields.email,
        role: fields.role,
        status: fields.status,
        password: None,
    };
    if let Some(password) = fields.password.filter(|p| !p.is_empty()) {
        update = update.password(password);
    }
    if update.is_empty() {
        return Err(CliError::EmptyUpdate);
    }

    if !registry.update(&id, update)? {
        return Err(CliError::AdminNotFound(id.to_string()));
    }

    let admin = registry
        .get(&id)
        .ok_or_else(|| CliError::AdminNotFound(id.to_string()))?;
    tracing::info!(
        "Admin {} updated: {} <{}>, {}, {}",
        admin.id,
        admin.name,
        admin.email,
        admin.role.label(),
        admin.status
    );
    Ok(admin)
}

/// Remove an admin account.
pub fn remove(registry: &AdminRegistry, id: &str) -> Result<(), CliError> {
    let id = AdminId::new(id);
    if !registry.remove(&id) {
        return Err(CliError::AdminNotFound(id.to_string()));
    }
    tracing::info!("Admin {} removed", id);
    Ok(())
}
