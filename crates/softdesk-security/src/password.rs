//! Password policy and Argon2id hashing

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{Result, SecurityError};

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password strength rules applied before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub allow_numeric_only: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            allow_numeric_only: false,
        }
    }
}

impl PasswordPolicy {
    /// Check a raw password, reporting the first rule it breaks
    pub fn check(&self, raw: &str) -> Result<()> {
        if raw.chars().count() < self.min_length {
            return Err(SecurityError::WeakPassword {
                reason: format!(
                    "This password is too short. It must contain at least {} characters.",
                    self.min_length
                ),
            });
        }
        if !self.allow_numeric_only && raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(SecurityError::WeakPassword {
                reason: "This password is entirely numeric.".to_string(),
            });
        }
        Ok(())
    }
}

/// Argon2id hasher producing PHC strings
#[derive(Default)]
pub struct PasswordHasherService {
    argon2: Argon2<'static>,
}

impl PasswordHasherService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash with a fresh random salt
    pub fn hash(&self, raw: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| SecurityError::Hashing {
                message: e.to_string(),
            })
    }

    /// `false` on mismatch or when `hash` is not a PHC string
    pub fn verify(&self, raw: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self.argon2.verify_password(raw.as_bytes(), &parsed).is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_rejects_short() {
        let err = PasswordPolicy::default().check("abc123").unwrap_err();
        assert!(err.to_string().contains("at least 8 characters"));
    }

    #[test]
    fn test_policy_rejects_numeric_only() {
        let err = PasswordPolicy::default().check("1234567890").unwrap_err();
        assert!(err.to_string().contains("entirely numeric"));
    }

    #[test]
    fn test_policy_accepts_mixed() {
        assert!(PasswordPolicy::default().check("s3cretPass").is_ok());
    }

    #[test]
    fn test_hash_is_salted_phc() {
        let hasher = PasswordHasherService::new();
        let a = hasher.hash("s3cretPass").unwrap();
        let b = hasher.hash("s3cretPass").unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        assert!(hasher.verify("s3cretPass", &a));
        assert!(hasher.verify("s3cretPass", &b));
        assert!(!hasher.verify("wrongPass1", &a));
    }

    #[test]
    fn test_verify_malformed_hash() {
        assert!(!PasswordHasherService::new().verify("anything", "plaintext"));
    }
}
