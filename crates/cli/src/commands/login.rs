//! Credential verification command.
//!
//! ```bash
//! mb-cli login -e grace@mineralbridge.com --password ...
//! ```

use mineral_bridge_admin::{AdminRegistry, AdminUser, Session};
use secrecy::SecretString;

use super::CliError;

/// Sign in and log what the admin may see and do.
///
/// Every failure produces the same [`CliError::LoginFailed`].
pub fn login(
    registry: &AdminRegistry,
    email: &str,
    password: Option<String>,
) -> Result<AdminUser, CliError> {
    let password = SecretString::from(password.ok_or(CliError::MissingPassword)?);

    let mut session = Session::new(registry);
    if !session.login(email, &password) {
        return Err(CliError::LoginFailed);
    }

    let Some(user) = session.user().cloned() else {
        return Err(CliError::LoginFailed);
    };

    tracing::info!("Signed in as {} <{}>", user.name, user.email);
    tracing::info!("  Role: {}", session.role_label(user.role));
    tracing::info!("  Permissions: {}", session.permissions().join(", "));
    let modules: Vec<String> = session
        .visible_modules()
        .into_iter()
        .map(|module| format!("{module} ({})", session.module_access_level(module.as_str())))
        .collect();
    tracing::info!("  Modules: {}", modules.join(", "));

    session.logout();
    Ok(user)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mineral_bridge_admin::{CredentialHasher, MemoryStore};
    use mineral_bridge_core::Role;

    use super::*;

    fn registry() -> AdminRegistry {
        AdminRegistry::open(MemoryStore::new(), CredentialHasher::fast())
    }

    #[test]
    fn test_login_success() {
        let registry = registry();
        let user = login(&registry, "grace@mineralbridge.com", Some("demo123".to_owned())).unwrap();
        assert_eq!(user.role, Role::OperationsManager);
    }

    #[test]
    fn test_login_failures_are_uniform() {
        let registry = registry();
        let wrong_password = login(&registry, "grace@mineralbridge.com", Some("x".to_owned()));
        let unknown = login(&registry, "ghost@mineralbridge.com", Some("demo123".to_owned()));
        let inactive = login(&registry, "emily@mineralbridge.com", Some("demo123".to_owned()));

        for result in [wrong_password, unknown, inactive] {
            assert_eq!(result.unwrap_err().to_string(), "Invalid email or password");
        }
    }

    #[test]
    fn test_login_requires_password() {
        let registry = registry();
        assert!(matches!(
            login(&registry, "grace@mineralbridge.com", None),
            Err(CliError::MissingPassword)
        ));
    }
}
