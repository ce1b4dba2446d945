//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id and a random salt, stored as PHC
//! strings, and verified through the `password-hash` verifier, which compares
//! digests in constant time.

use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::{Algorithm, Argon2, Params, Version};
use secrecy::{ExposeSecret, SecretString};

use super::error::CredentialError;
use crate::models::PasswordDigest;

/// Argon2id hasher with configurable cost.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

impl CredentialHasher {
    #[must_use]
    pub const fn new(params: Params) -> Self {
        Self { params }
    }

    /// Hasher with explicit memory (KiB) and iteration cost.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidParams` if Argon2 rejects the costs.
    pub fn with_cost(memory_kib: u32, iterations: u32) -> Result<Self, CredentialError> {
        Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .map(Self::new)
            .map_err(|e| CredentialError::InvalidParams(e.to_string()))
    }

    /// Cheapest valid parameters. Only for tests and local tooling.
    #[must_use]
    pub fn fast() -> Self {
        Self::new(
            Params::new(
                Params::MIN_M_COST,
                Params::MIN_T_COST,
                Params::MIN_P_COST,
                None,
            )
            .unwrap_or_default(),
        )
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a cleartext password with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Hash` if Argon2 fails.
    pub fn hash(&self, password: &SecretString) -> Result<PasswordDigest, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|hash| PasswordDigest::new(hash.to_string()))
            .map_err(|e| CredentialError::Hash(e.to_string()))
    }

    /// Check a cleartext password against a stored digest.
    ///
    /// The cost parameters embedded in the digest are used, so digests made
    /// with other settings still verify.
    #[must_use]
    pub fn verify(&self, password: &SecretString, digest: &PasswordDigest) -> bool {
        let Ok(parsed) = PasswordHash::new(digest.as_str()) else {
            return false;
        };
        self.argon2()
            .verify_password(password.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }

    /// Hash a digest that still holds a legacy cleartext password.
    ///
    /// Argon2id digests are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Hash` if Argon2 fails.
    pub fn upgrade(&self, digest: PasswordDigest) -> Result<PasswordDigest, CredentialError> {
        if digest.is_argon2id() {
            return Ok(digest);
        }
        self.hash(&SecretString::from(digest.as_str().to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = CredentialHasher::fast();
        let digest = hasher.hash(&secret("demo123")).unwrap();

        assert!(digest.is_argon2id());
        assert!(digest.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify(&secret("demo123"), &digest));
        assert!(!hasher.verify(&secret("demo124"), &digest));
        assert!(!hasher.verify(&secret(""), &digest));
    }

    #[test]
    fn test_salts_differ() {
        let hasher = CredentialHasher::fast();
        let a = hasher.hash(&secret("demo123")).unwrap();
        let b = hasher.hash(&secret("demo123")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cleartext_digest_never_verifies() {
        let hasher = CredentialHasher::fast();
        let legacy = PasswordDigest::new("demo123".to_owned());
        assert!(!hasher.verify(&secret("demo123"), &legacy));
    }

    #[test]
    fn test_upgrade_hashes_legacy_values_only() {
        let hasher = CredentialHasher::fast();
        let upgraded = hasher
            .upgrade(PasswordDigest::new("demo123".to_owned()))
            .unwrap();
        assert!(upgraded.is_argon2id());
        assert!(hasher.verify(&secret("demo123"), &upgraded));

        let again = hasher.upgrade(upgraded.clone()).unwrap();
        assert_eq!(again, upgraded);
    }

    #[test]
    fn test_upgrade_rehashes_phc_shaped_cleartext() {
        let hasher = CredentialHasher::fast();
        let legacy = "$copper$gold";
        let upgraded = hasher
            .upgrade(PasswordDigest::new(legacy.to_owned()))
            .unwrap();
        assert!(upgraded.is_argon2id());
        assert!(hasher.verify(&secret(legacy), &upgraded));
    }

    #[test]
    fn test_verify_uses_digest_params() {
        let strong = CredentialHasher::with_cost(64, 2).unwrap();
        let digest = strong.hash(&secret("escrow")).unwrap();
        assert!(CredentialHasher::fast().verify(&secret("escrow"), &digest));
    }

    #[test]
    fn test_with_cost_rejects_invalid_params() {
        assert!(matches!(
            CredentialHasher::with_cost(0, 1),
            Err(CredentialError::InvalidParams(_))
        ));
        assert!(matches!(
            CredentialHasher::with_cost(64, 0),
            Err(CredentialError::InvalidParams(_))
        ));
    }
}
