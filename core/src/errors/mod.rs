//! Domain-specific error types and error handling.

mod types;


pub use types::{CryptoError, JwtError, RepositoryError, SessionDomainError, UserDomainError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Session(#[from] SessionDomainError),

    #[error(transparent)]
    User(#[from] UserDomainError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Jwt(#[from] JwtError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type DomainResult<T> = Result<T, DomainError>;
