//! Shared utilities and common types for the FitTrack server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types
//! - Field validation rules

pub mod config;
pub mod types;
pub mod utils;

pub use config::{
    AppConfig, AuthConfig, CryptoConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    PasswordConfig,
};
pub use types::{PaginatedResponse, Pagination};
pub use utils::validation;
