//! Error types for the session, user, crypto, token and persistence layers
//!
//! Domain and value-object construction never panics; every failure below is
//! returned as the `Err` side of a `Result`.

use thiserror::Error;

/// Failures while building a session or one of its value objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionDomainError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid user id")]
    InvalidUserId,

    #[error("Invalid token type: {value}")]
    InvalidTokenType { value: String },

    #[error("Invalid session: {reason}")]
    InvalidSession { reason: String },

    #[error("Token already used")]
    TokenAlreadyUsed,
}

/// Failures while building or updating a user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserDomainError {
    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid password: {reason}")]
    InvalidPassword { reason: String },

    #[error("Invalid {field}: must be between {min} and {max}")]
    InvalidAttribute { field: String, min: u32, max: u32 },

    #[error("Password hashing failed: {message}")]
    PasswordHash { message: String },
}

/// Failures of the symmetric cipher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Unsupported cipher algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Initialization vector must not be empty")]
    EmptyInitVector,

    #[error("Encryption failed")]
    EncryptionFailed,

    #[error("Decryption failed: {message}")]
    DecryptionFailed { message: String },
}

/// Failures of the JWT signer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwtError {
    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Invalid expiresIn value: {value}")]
    InvalidExpiresIn { value: String },

    #[error("Payload must be a JSON object or string")]
    InvalidPayload,

    #[error("expiresIn cannot be set on a string payload")]
    ExpiryOnStringPayload,

    #[error("Token signing failed: {message}")]
    SigningFailed { message: String },
}

/// Failures reported by repositories and mappers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unique constraint violated on {field}")]
    Conflict { field: String },

    #[error("Mapping failed: {message}")]
    Mapping { message: String },

    #[error("Storage failure: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn mapping(message: impl ToString) -> Self {
        Self::Mapping {
            message: message.to_string(),
        }
    }
}
