//! Hashed account password.

use std::fmt;

use ft_shared::validation::{is_valid_password, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

use crate::errors::UserDomainError;

/// A bcrypt hash; the plaintext is never retained
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Validate a plaintext password and hash it with the given bcrypt cost
    pub fn create(plain: &str, hash_cost: u32) -> Result<Self, UserDomainError> {
        if !is_valid_password(plain) {
            return Err(UserDomainError::InvalidPassword {
                reason: format!(
                    "must be between {} and {} bytes",
                    PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
                ),
            });
        }

        let hash = bcrypt::hash(plain, hash_cost).map_err(|e| UserDomainError::PasswordHash {
            message: e.to_string(),
        })?;

        Ok(Self { hash })
    }

    /// Wrap a hash loaded from storage
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, UserDomainError> {
        let hash = hash.into();
        if !hash.starts_with("$2") {
            return Err(UserDomainError::InvalidPassword {
                reason: "stored value is not a bcrypt hash".to_string(),
            });
        }
        Ok(Self { hash })
    }

    /// Check a plaintext candidate against the hash
    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.hash).unwrap_or(false)
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
