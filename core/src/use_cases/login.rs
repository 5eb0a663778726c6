//! Password login issuing an access token and a refresh session

use std::sync::Arc;

use ft_shared::config::JwtConfig;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::{Session, SessionCreateParams, SessionTokenParams};
use crate::domain::value_objects::{Token, TokenOptions, TokenType};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::TokenCodec;

use super::dto::AuthTokens;
use super::errors::UseCaseError;

pub struct Login<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    codec: TokenCodec,
    jwt: JwtConfig,
}

impl<U: UserRepository, S: SessionRepository> Login<U, S> {
    pub fn new(users: Arc<U>, sessions: Arc<S>, codec: TokenCodec, jwt: JwtConfig) -> Self {
        Self {
            users,
            sessions,
            codec,
            jwt,
        }
    }

    /// Check credentials and issue tokens.
    ///
    /// The access token is stateless. The refresh token is persisted as a
    /// `REFRESH` session, stored encrypted.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthTokens)` - credentials matched
    /// * `Err(UseCaseError::Unauthorized)` - unknown email or wrong password;
    ///   the two cases are not distinguished
    pub async fn execute(&self, email: &str, password: &str) -> Result<AuthTokens, UseCaseError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .filter(|user| user.password.verify(password))
            .ok_or_else(|| {
                warn!("Login rejected: invalid credentials");
                UseCaseError::unauthorized("Invalid credentials")
            })?;

        let access = Token::create(
            json!({ "userId": user.id, "isAdmin": user.is_admin }),
            TokenOptions::expires_in(self.jwt.auth_expires_in.as_str()),
            &self.codec,
        )
        .map_err(|e| UseCaseError::Internal {
            message: format!("failed to issue access token: {}", e),
        })?;

        let session_id = Uuid::new_v4();
        let refresh = Session::create(
            SessionCreateParams {
                user_id: user.id.to_string(),
                token: SessionTokenParams {
                    value: json!({ "userId": user.id, "sessionId": session_id }),
                    options: TokenOptions::expires_in(self.jwt.refresh_expires_in.as_str()),
                },
                token_type: TokenType::Refresh.to_string(),
            },
            Some(session_id),
            &self.codec,
        )
        .map_err(|e| UseCaseError::Internal {
            message: format!("failed to issue refresh token: {}", e),
        })?;

        let refresh = self.sessions.create(refresh).await?;
        info!(user_id = %user.id, session_id = %refresh.id(), "User logged in");

        Ok(AuthTokens {
            access_token: access.value().to_string(),
            refresh_token: refresh.token().value().to_string(),
            expires_at: access.expiry(),
        })
    }
}
