//! Stored password type.

use argon2::Algorithm;
use argon2::password_hash::PasswordHash;
use serde::{Deserialize, Serialize};

/// A password as kept in the admin blob.
///
/// Normally an Argon2id PHC string (`$argon2id$v=19$...`). Blobs written by
/// older dashboard builds hold cleartext instead; [`PasswordDigest::is_argon2id`]
/// tells the two apart so the registry can hash legacy values on load. Any
/// other value, PHC strings for other algorithms included, counts as legacy.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap a stored value.
    #[must_use]
    pub const fn new(stored: String) -> Self {
        Self(stored)
    }

    /// Get the stored value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value is an Argon2id PHC hash.
    #[must_use]
    pub fn is_argon2id(&self) -> bool {
        PasswordHash::new(&self.0).is_ok_and(|hash| hash.algorithm == Algorithm::Argon2id.ident())
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordDigest([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let digest = PasswordDigest::new("demo123".to_owned());
        assert_eq!(format!("{digest:?}"), "PasswordDigest([REDACTED])");
    }

    #[test]
    fn test_is_argon2id() {
        assert!(!PasswordDigest::new("demo123".to_owned()).is_argon2id());
        assert!(!PasswordDigest::new(String::new()).is_argon2id());
        assert!(
            PasswordDigest::new(
                "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHRzYWx0$0b4XOyy9zNm+jzPGmqLXjA".to_owned()
            )
            .is_argon2id()
        );
    }

    #[test]
    fn test_other_phc_strings_are_not_argon2id() {
        for stored in [
            "$argon2i$v=19$m=8,t=1,p=1$c2FsdHNhbHRzYWx0$0b4XOyy9zNm+jzPGmqLXjA",
            "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$0b4XOyy9zNm+jzPGmqLXjA",
            "$copper$gold",
        ] {
            assert!(
                !PasswordDigest::new(stored.to_owned()).is_argon2id(),
                "{stored} should count as legacy"
            );
        }
    }
}
