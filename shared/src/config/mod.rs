//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing, token encryption and password hashing
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, CryptoConfig, JwtConfig, PasswordConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for the given environment with its logging defaults
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Reject settings that must never reach production
    pub fn validate(&self) -> Result<(), String> {
        if !self.environment.is_production() {
            return Ok(());
        }
        if self.auth.jwt.is_using_default_secret() {
            return Err("JWT secret must be configured in production".to_string());
        }
        if self.auth.crypto.is_using_default_key() {
            return Err("Token encryption key must be configured in production".to_string());
        }
        Ok(())
    }
}
