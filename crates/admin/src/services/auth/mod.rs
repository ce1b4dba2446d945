//! Admin authentication and session service.
//!
//! A [`Session`] tracks who is signed in and answers access questions for
//! that admin. It borrows the [`AdminRegistry`] it authenticates against, so
//! several sessions can share one registry.
//!
//! ```text
//! Anonymous --login ok--> Authenticated(role) --logout--> Anonymous
//! ```

mod error;
mod password;

pub use error::CredentialError;
pub use password::CredentialHasher;

use secrecy::SecretString;
use tracing::{info, warn};

use mineral_bridge_core::{AccessLevel, AdminId, Module, Role, access, permissions_of};

use super::registry::AdminRegistry;
use crate::models::{AdminUpdate, AdminUser, NewAdmin};

/// The signed-in admin, if any, and their derived permissions.
#[derive(Debug)]
pub struct Session<'a> {
    registry: &'a AdminRegistry,
    user: Option<AdminUser>,
    permissions: &'static [&'static str],
}

impl<'a> Session<'a> {
    /// An anonymous session backed by `registry`.
    #[must_use]
    pub const fn new(registry: &'a AdminRegistry) -> Self {
        Self {
            registry,
            user: None,
            permissions: &[],
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    /// Role of the signed-in admin.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Permission entries granted to the current role; empty when anonymous.
    #[must_use]
    pub const fn permissions(&self) -> &'static [&'static str] {
        self.permissions
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the signed-in admin. `None` signs out.
    pub fn set_user(&mut self, user: Option<AdminUser>) {
        self.permissions = user.as_ref().map_or(&[], |user| permissions_of(user.role));
        self.user = user;
    }

    /// Check credentials and, on success, sign the admin in.
    ///
    /// A failed attempt leaves the current session untouched.
    pub fn login(&mut self, email: &str, password: &SecretString) -> bool {
        let Some(user) = self.registry.find_by_credentials(email, password) else {
            warn!(email, "login failed");
            return false;
        };
        info!(id = %user.id, role = %user.role, "admin signed in");
        self.set_user(Some(user));
        true
    }

    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            info!(id = %user.id, "admin signed out");
        }
        self.set_user(None);
    }

    // =========================================================================
    // Access checks for the current role
    // =========================================================================

    /// Role-hierarchy check when `required` names a role, permission check
    /// otherwise.
    #[must_use]
    pub fn has_access(&self, required: &str) -> bool {
        access::has_access(self.role(), required)
    }

    #[must_use]
    pub fn has_module_access(&self, module: &str) -> bool {
        access::has_module_access(self.role(), module)
    }

    #[must_use]
    pub fn module_access_level(&self, module: &str) -> AccessLevel {
        access::module_access_level(self.role(), module)
    }

    #[must_use]
    pub fn has_minimum_access(&self, module: &str, minimum: AccessLevel) -> bool {
        access::has_minimum_access(self.role(), module, minimum)
    }

    /// Modules to show in the navigation for the current role.
    #[must_use]
    pub fn visible_modules(&self) -> Vec<Module> {
        access::visible_modules(self.role())
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn role_label(&self, role: Role) -> &'static str {
        access::role_label(role)
    }

    // =========================================================================
    // Registry pass-through
    // =========================================================================

    #[must_use]
    pub fn admins(&self) -> Vec<AdminUser> {
        self.registry.list()
    }

    /// # Errors
    ///
    /// Returns `CredentialError` if the password cannot be hashed.
    pub fn add_admin(&self, admin: NewAdmin) -> Result<AdminUser, CredentialError> {
        self.registry.add(admin)
    }

    /// # Errors
    ///
    /// Returns `CredentialError` if a new password cannot be hashed.
    pub fn update_admin(&self, id: &AdminId, update: AdminUpdate) -> Result<bool, CredentialError> {
        self.registry.update(id, update)
    }

    pub fn remove_admin(&self, id: &AdminId) -> bool {
        self.registry.remove(id)
    }

    #[must_use]
    pub fn find_by_credentials(&self, email: &str, password: &SecretString) -> Option<AdminUser> {
        self.registry.find_by_credentials(email, password)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mineral_bridge_core::{Email, permissions};

    use super::*;
    use crate::store::MemoryStore;

    fn registry() -> AdminRegistry {
        AdminRegistry::open(MemoryStore::new(), CredentialHasher::fast())
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    #[test]
    fn test_anonymous_session_is_restrictive() {
        let registry = registry();
        let session = Session::new(&registry);

        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
        assert!(session.permissions().is_empty());
        assert!(!session.has_access("orders_read"));
        assert!(!session.has_access("data_clerk"));
        assert!(!session.has_module_access("dashboard"));
        assert_eq!(session.module_access_level("dashboard"), AccessLevel::None);
        assert!(session.visible_modules().is_empty());
    }

    #[test]
    fn test_login_sets_user_and_permissions() {
        let registry = registry();
        let mut session = Session::new(&registry);

        assert!(session.login("grace@mineralbridge.com", &secret("demo123")));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::OperationsManager));
        assert_eq!(
            session.permissions(),
            permissions_of(Role::OperationsManager)
        );
        assert!(session.has_access(permissions::ORDERS_DELETE));
        assert!(!session.has_access(permissions::RELEASE_PAYMENT));
        assert!(session.has_access("support_agent"));
        assert!(!session.has_access("ceo"));
        assert_eq!(session.module_access_level("finance"), AccessLevel::View);
        assert!(session.has_minimum_access("orders", AccessLevel::Full));
        assert!(!session.has_module_access("settings"));
    }

    #[test]
    fn test_failed_login_keeps_previous_state() {
        let registry = registry();
        let mut session = Session::new(&registry);
        assert!(session.login("admin@mineralbridge.com", &secret("demo123")));

        assert!(!session.login("admin@mineralbridge.com", &secret("nope")));
        assert_eq!(session.role(), Some(Role::Ceo));
    }

    #[test]
    fn test_inactive_admin_cannot_login() {
        let registry = registry();
        let mut session = Session::new(&registry);
        assert!(!session.login("emily@mineralbridge.com", &secret("demo123")));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_user_and_permissions() {
        let registry = registry();
        let mut session = Session::new(&registry);
        session.login("james@mineralbridge.com", &secret("demo123"));

        session.logout();

        assert!(session.user().is_none());
        assert!(session.permissions().is_empty());
        assert!(!session.has_module_access("dashboard"));
    }

    #[test]
    fn test_set_user_derives_permissions() {
        let registry = registry();
        let mut session = Session::new(&registry);
        let clerk = AdminUser {
            id: AdminId::new("9"),
            name: "Kwame Asante".to_owned(),
            email: Email::parse("kwame@mineralbridge.com").unwrap(),
            role: Role::DataClerk,
            status: mineral_bridge_core::AdminStatus::Active,
        };

        session.set_user(Some(clerk));

        assert_eq!(session.permissions(), permissions_of(Role::DataClerk));
        assert_eq!(session.module_access_level("orders"), AccessLevel::Log);
        assert!(session.has_access(permissions::QR_SENT_MARK));
    }

    #[test]
    fn test_added_admin_can_login_immediately() {
        let registry = registry();
        let mut session = Session::new(&registry);

        let created = session
            .add_admin(NewAdmin {
                name: "Kwame Asante".to_owned(),
                email: Email::parse("kwame@mineralbridge.com").unwrap(),
                password: secret("ledger-9"),
                role: Role::DataClerk,
            })
            .unwrap();

        assert!(session.login("kwame@mineralbridge.com", &secret("ledger-9")));
        assert_eq!(session.user().map(|u| &u.id), Some(&created.id));
        assert_eq!(session.role_label(Role::DataClerk), "Data Clerk");
    }

    #[test]
    fn test_pass_through_mutations() {
        let registry = registry();
        let session = Session::new(&registry);
        let id = AdminId::new("4");

        let reactivate = AdminUpdate::default().status(mineral_bridge_core::AdminStatus::Active);
        assert!(session.update_admin(&id, reactivate).unwrap());
        assert!(
            session
                .find_by_credentials("emily@mineralbridge.com", &secret("demo123"))
                .is_some()
        );
        assert!(session.remove_admin(&id));
        assert_eq!(session.admins().len(), 3);
    }
}
