//! Infrastructure-specific error types

use ft_core::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Configuration was read but is not acceptable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Signer or cipher could not be built from configuration
    #[error("Service initialization error: {0}")]
    Domain(#[from] DomainError),

    /// The global tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
