//! Password hashing and credential verification.
//!
//! [`Password`] holds a one-way Argon2 hash and never the plain text.
//! [`CredentialHasher`] is the seam the auth orchestrator depends on.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Password value object wrapping a PHC-formatted hash string.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a fresh random salt.
    ///
    /// # Errors
    /// Returns an internal error if the hasher fails.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A hash that cannot be parsed never matches.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[inline]
fn argon2() -> Argon2<'static> {
    Argon2::default()
}

/// Hashes new secrets and checks plain text against stored hashes.
pub trait CredentialHasher: Send + Sync {
    /// Produce a salted one-way hash of `plain_text`.
    fn hash(&self, plain_text: &str) -> DomainResult<Password>;

    /// Check `plain_text` against `stored`. A mismatch is `false`, not an error.
    fn verify(&self, plain_text: &str, stored: &Password) -> bool;
}

/// Argon2id hasher with the library's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        Password::new(plain_text)
    }

    fn verify(&self, plain_text: &str, stored: &Password) -> bool {
        stored.verify(plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "bocateamo";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_hash_is_not_plain_text() {
        let password = Password::new("bocateamo").unwrap();
        assert_ne!(password.as_str(), "bocateamo");
        assert!(password.as_str().starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_unparseable_hash_never_matches() {
        let stored = Password::from_hash("bocateamo");
        assert!(!stored.verify("bocateamo"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("bocateamo").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(password.as_str()));
    }

    #[test]
    fn test_argon2_hasher() {
        let hasher = Argon2Hasher;
        let stored = hasher.hash("riverteamo").unwrap();

        assert!(hasher.verify("riverteamo", &stored));
        assert!(!hasher.verify("bocateamo", &stored));
    }
}
