//! Errors surfaced by use cases to the transport layer

use thiserror::Error;

use crate::errors::{RepositoryError, SessionDomainError, UserDomainError};

/// Use case failure with the HTTP status it maps to
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid user: {0}")]
    InvalidUser(#[from] UserDomainError),

    #[error("Invalid session: {0}")]
    InvalidSession(#[from] SessionDomainError),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{field} already in use")]
    Conflict { field: String },

    #[error(transparent)]
    Repository(RepositoryError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UseCaseError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Unauthorized { .. } | Self::InvalidToken => 401,
            Self::InvalidUser(_) | Self::InvalidSession(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Repository(_) | Self::Internal { .. } => 500,
        }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidUser(_) => "INVALID_USER",
            Self::InvalidSession(_) => "INVALID_SESSION",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<RepositoryError> for UseCaseError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { resource } => Self::NotFound { resource },
            RepositoryError::Conflict { field } => Self::Conflict { field },
            other => Self::Repository(other),
        }
    }
}
