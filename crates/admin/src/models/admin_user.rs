//! Admin user domain types.
//!
//! [`AdminRecord`] is what the registry stores, credentials included.
//! [`AdminUser`] is the same record with the password stripped; it is the only
//! shape that leaves the registry.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use mineral_bridge_core::{AdminId, AdminStatus, Email, Role};

use super::credential::PasswordDigest;

/// A stored admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    /// Unique, stable identifier.
    pub id: AdminId,
    /// Display name.
    pub name: String,
    /// Login email (matched case-insensitively).
    pub email: Email,
    /// Password hash.
    pub password: PasswordDigest,
    /// Role granted to the admin.
    pub role: Role,
    /// Whether the admin may sign in.
    pub status: AdminStatus,
}

impl AdminRecord {
    /// Sanitized copy without the password.
    #[must_use]
    pub fn to_user(&self) -> AdminUser {
        AdminUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
        }
    }

    /// Sanitize, consuming the record.
    #[must_use]
    pub fn into_user(self) -> AdminUser {
        AdminUser {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }
}

/// An admin account without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: AdminId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    pub status: AdminStatus,
}

/// Input for creating an admin. Id and status are assigned by the registry.
#[derive(Debug)]
pub struct NewAdmin {
    pub name: String,
    pub email: Email,
    pub password: SecretString,
    pub role: Role,
}

/// Partial update of an admin. `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct AdminUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub role: Option<Role>,
    pub status: Option<AdminStatus>,
    pub password: Option<SecretString>,
}

impl AdminUpdate {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: AdminStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Whether the update carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.password.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> AdminRecord {
        AdminRecord {
            id: AdminId::new("3"),
            name: "Grace Okafor".to_owned(),
            email: Email::parse("grace@mineralbridge.com").unwrap(),
            password: PasswordDigest::new("demo123".to_owned()),
            role: Role::OperationsManager,
            status: AdminStatus::Active,
        }
    }

    #[test]
    fn test_user_has_no_password_field() {
        let json = serde_json::to_value(record().to_user()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_record_wire_format() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "3",
                "name": "Grace Okafor",
                "email": "grace@mineralbridge.com",
                "password": "demo123",
                "role": "operations_manager",
                "status": "Active",
            })
        );
    }

    #[test]
    fn test_to_user_and_into_user_agree() {
        let record = record();
        assert_eq!(record.to_user(), record.clone().into_user());
    }

    #[test]
    fn test_update_builder() {
        assert!(AdminUpdate::default().is_empty());
        let update = AdminUpdate::default()
            .name("Grace O.")
            .status(AdminStatus::Inactive);
        assert!(!update.is_empty());
        assert_eq!(update.name.as_deref(), Some("Grace O."));
        assert!(update.role.is_none());
        assert!(update.password.is_none());
    }
}
