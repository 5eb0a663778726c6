//! Session entity: a typed, single-use token issued to a user.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::value_objects::{Token, TokenOptions, TokenType};
use crate::errors::SessionDomainError;
use crate::services::TokenCodec;

/// Raw token input of [`SessionCreateParams`]
#[derive(Debug, Clone, Default)]
pub struct SessionTokenParams {
    /// Payload object to sign, or ciphertext when `options.is_encrypted` is set
    pub value: Value,
    pub options: TokenOptions,
}

/// Raw input for creating a session
#[derive(Debug, Clone, Default)]
pub struct SessionCreateParams {
    pub user_id: String,
    pub token: SessionTokenParams,
    /// Wire tag such as `"EMAIL_VERIFICATION"`
    pub token_type: String,
}

/// Already-validated parts of a stored session
#[derive(Debug, Clone)]
pub struct SessionParts {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: Token,
    pub token_type: TokenType,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: Uuid,
    user_id: Uuid,
    token: Token,
    token_type: TokenType,
    used_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Validate raw input and build a new, unused session.
    ///
    /// # Arguments
    ///
    /// * `params` - raw user id, token input and token type tag
    /// * `id` - identity to assign; a v4 id is generated when `None`
    /// * `codec` - signer and cipher handed to the token
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - every value object was built
    /// * `Err(SessionDomainError::InvalidSession)` - the input is missing a
    ///   required part; no value object is built in that case
    /// * `Err(_)` - the first value object that failed, checked in the order
    ///   user id, token, token type
    pub fn create(
        params: SessionCreateParams,
        id: Option<Uuid>,
        codec: &TokenCodec,
    ) -> Result<Self, SessionDomainError> {
        Self::is_valid(&params)?;
        let (user_id, token, token_type) = Self::mount_value_object(params, codec)?;

        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            user_id,
            token,
            token_type,
            used_at: None,
            created_at: Utc::now(),
        })
    }

    fn is_valid(params: &SessionCreateParams) -> Result<(), SessionDomainError> {
        let reason = if params.user_id.trim().is_empty() {
            "user id is required"
        } else if params.token.value.is_null() {
            "token is required"
        } else if params.token_type.trim().is_empty() {
            "token type is required"
        } else {
            return Ok(());
        };

        Err(SessionDomainError::InvalidSession {
            reason: reason.to_string(),
        })
    }

    fn mount_value_object(
        params: SessionCreateParams,
        codec: &TokenCodec,
    ) -> Result<(Uuid, Token, TokenType), SessionDomainError> {
        let user_id =
            Uuid::parse_str(params.user_id.trim()).map_err(|_| SessionDomainError::InvalidUserId)?;
        let token = Token::create(params.token.value, params.token.options, codec)?;
        let token_type = TokenType::create(&params.token_type)?;
        Ok((user_id, token, token_type))
    }

    /// Rebuild a session from storage
    pub fn restore(parts: SessionParts) -> Self {
        Self {
            id: parts.id,
            user_id: parts.user_id,
            token: parts.token,
            token_type: parts.token_type,
            used_at: parts.used_at,
            created_at: parts.created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn used_at(&self) -> Option<DateTime<Utc>> {
        self.used_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// Mark the token as consumed. A token can be used once.
    pub fn use_token(&mut self) -> Result<(), SessionDomainError> {
        if self.is_used() {
            return Err(SessionDomainError::TokenAlreadyUsed);
        }
        self.used_at = Some(Utc::now());
        Ok(())
    }

    /// Unused and still authenticating
    pub fn is_token_usable(&self) -> bool {
        !self.is_used() && self.token.is_auth()
    }

    /// Whether a presented bearer token is this session's token
    pub fn matches_token(&self, presented: &str) -> bool {
        self.token.matches(presented)
    }
}
