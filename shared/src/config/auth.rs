//! Authentication, token signing and token encryption configuration

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";
const DEFAULT_SECURITY_KEY: &str = "dev-key-change-me-32-bytes-long!";
const DEFAULT_INIT_VECTOR: &str = "fittrack-dev-iv";

/// JWT signing configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign and verify tokens
    pub secret: String,

    /// HMAC algorithm (HS256, HS384, HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Lifetime of access tokens, e.g. "15m"
    #[serde(default = "default_auth_expires_in")]
    pub auth_expires_in: String,

    /// Lifetime of refresh sessions, e.g. "7d"
    #[serde(default = "default_refresh_expires_in")]
    pub refresh_expires_in: String,

    /// Lifetime of email verification tokens, e.g. "1h"
    #[serde(default = "default_email_verification_expires_in")]
    pub email_verification_expires_in: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            algorithm: default_algorithm(),
            auth_expires_in: default_auth_expires_in(),
            refresh_expires_in: default_refresh_expires_in(),
            email_verification_expires_in: default_email_verification_expires_in(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Symmetric cipher configuration for tokens stored at rest.
///
/// Loaded once at startup and handed to the crypto service; the key is the raw
/// 32-byte string and the init vector binds every ciphertext to this deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CryptoConfig {
    /// Cipher name, currently only "aes-256-gcm"
    #[serde(default = "default_cipher_algorithm")]
    pub algorithm: String,

    /// 32-byte key
    pub security_key: String,

    /// Deployment-wide initialization vector
    pub init_vector: String,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            algorithm: default_cipher_algorithm(),
            security_key: String::from(DEFAULT_SECURITY_KEY),
            init_vector: String::from(DEFAULT_INIT_VECTOR),
        }
    }
}

impl CryptoConfig {
    pub fn new(security_key: impl Into<String>, init_vector: impl Into<String>) -> Self {
        Self {
            algorithm: default_cipher_algorithm(),
            security_key: security_key.into(),
            init_vector: init_vector.into(),
        }
    }

    /// Check if using the development key (security warning)
    pub fn is_using_default_key(&self) -> bool {
        self.security_key == DEFAULT_SECURITY_KEY
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor (4..=31)
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            hash_cost: default_hash_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Token encryption configuration
    #[serde(default)]
    pub crypto: CryptoConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_auth_expires_in() -> String {
    String::from("15m")
}

fn default_refresh_expires_in() -> String {
    String::from("7d")
}

fn default_email_verification_expires_in() -> String {
    String::from("1h")
}

fn default_cipher_algorithm() -> String {
    String::from("aes-256-gcm")
}

fn default_hash_cost() -> u32 {
    12
}
