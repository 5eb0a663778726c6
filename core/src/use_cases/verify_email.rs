//! Confirm an email address with a single-use verification token

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::value_objects::TokenType;
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::TokenCodec;

use super::errors::UseCaseError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerificationClaims {
    user_id: Uuid,
}

pub struct VerifyEmail<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    codec: TokenCodec,
}

impl<U: UserRepository, S: SessionRepository> VerifyEmail<U, S> {
    pub fn new(users: Arc<U>, sessions: Arc<S>, codec: TokenCodec) -> Self {
        Self {
            users,
            sessions,
            codec,
        }
    }

    /// Verify the owner's email with a token issued by
    /// [`SendEmailVerification`](super::SendEmailVerification).
    ///
    /// This method:
    /// 1. Decodes the token to find the owning user
    /// 2. Loads that user's latest verification session and checks the token
    ///    matches it and is neither expired nor used
    /// 3. Consumes the session with a conditional write, so only one of
    ///    several concurrent calls can succeed
    /// 4. Marks the user verified; if that write fails the session is
    ///    restored before the error is returned
    ///
    /// No repository write happens unless the token passes every check.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the email is now verified
    /// * `Err(UseCaseError::InvalidToken)` - the token is empty
    /// * `Err(UseCaseError::Unauthorized)` - the token is invalid, superseded,
    ///   expired or already used
    pub async fn execute(&self, token: &str) -> Result<bool, UseCaseError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(UseCaseError::InvalidToken);
        }

        let claims = self
            .codec
            .signer()
            .decode(token)
            .and_then(|claims| serde_json::from_value::<VerificationClaims>(claims).ok())
            .ok_or_else(|| {
                warn!("Email verification rejected: undecodable token");
                UseCaseError::unauthorized("Invalid verification token")
            })?;
        let user_id = claims.user_id;

        let session = self
            .sessions
            .find_last_by_user_id_and_type(user_id, TokenType::EmailVerification)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Email verification rejected: no session");
                UseCaseError::unauthorized("Verification session not found")
            })?;

        if !session.matches_token(token) {
            warn!(user_id = %user_id, "Email verification rejected: superseded token");
            return Err(UseCaseError::unauthorized("Invalid verification token"));
        }
        if session.is_used() {
            warn!(user_id = %user_id, "Email verification rejected: token already used");
            return Err(UseCaseError::unauthorized("Verification token already used"));
        }
        if !session.is_token_usable() {
            warn!(user_id = %user_id, "Email verification rejected: token expired");
            return Err(UseCaseError::unauthorized("Verification token expired"));
        }

        let mut user = self
            .users
            .find_one_by_id(user_id)
            .await?
            .ok_or_else(|| UseCaseError::unauthorized("User not found"))?;

        if !self.sessions.consume(session.id(), Utc::now()).await? {
            warn!(user_id = %user_id, "Email verification rejected: token already used");
            return Err(UseCaseError::unauthorized("Verification token already used"));
        }

        user.verify_email();
        if let Err(update_error) = self.users.update(user).await {
            let session_id = session.id();
            if let Err(rollback_error) = self.sessions.update(session).await {
                error!(
                    session_id = %session_id,
                    error = %rollback_error,
                    "Failed to release verification session after user update failed"
                );
            }
            return Err(update_error.into());
        }

        info!(user_id = %user_id, "Email verified");
        Ok(true)
    }
}
