//! Purpose tag of a session token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SessionDomainError;

/// What a session token may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Auth,
    Refresh,
    EmailVerification,
    ResetPassword,
}

impl TokenType {
    pub const ALL: [TokenType; 4] = [
        TokenType::Auth,
        TokenType::Refresh,
        TokenType::EmailVerification,
        TokenType::ResetPassword,
    ];

    /// Parse a wire tag such as `"EMAIL_VERIFICATION"`. Matching is exact.
    pub fn create(value: &str) -> Result<Self, SessionDomainError> {
        Self::ALL
            .into_iter()
            .find(|token_type| token_type.as_str() == value)
            .ok_or_else(|| SessionDomainError::InvalidTokenType {
                value: value.to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Auth => "AUTH",
            TokenType::Refresh => "REFRESH",
            TokenType::EmailVerification => "EMAIL_VERIFICATION",
            TokenType::ResetPassword => "RESET_PASSWORD",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = SessionDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}
