//! Issue an email verification token and hand it to the mailer

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::entities::{Session, SessionCreateParams, SessionTokenParams};
use crate::domain::events::{UserCreated, UserCreatedHandler};
use crate::domain::value_objects::{TokenOptions, TokenType};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::{TokenCodec, VerificationMailer};

use super::errors::UseCaseError;

pub struct SendEmailVerification<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: VerificationMailer + ?Sized,
{
    users: Arc<U>,
    sessions: Arc<S>,
    mailer: Arc<M>,
    codec: TokenCodec,
    /// Lifetime of issued tokens, e.g. `"1h"`
    expires_in: String,
}

impl<U, S, M> SendEmailVerification<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: VerificationMailer + ?Sized,
{
    pub fn new(
        users: Arc<U>,
        sessions: Arc<S>,
        mailer: Arc<M>,
        codec: TokenCodec,
        expires_in: impl Into<String>,
    ) -> Self {
        Self {
            users,
            sessions,
            mailer,
            codec,
            expires_in: expires_in.into(),
        }
    }

    /// Create a fresh `EMAIL_VERIFICATION` session for the user and send its
    /// token. Earlier verification tokens stop matching once this succeeds.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the session was stored and the mailer accepted the token
    /// * `Err(UseCaseError::NotFound)` - no such user
    /// * `Err(UseCaseError::Conflict)` - the email is already verified
    /// * `Err(UseCaseError::Internal)` - the mailer failed
    pub async fn execute(&self, user_id: Uuid) -> Result<(), UseCaseError> {
        let user = self
            .users
            .find_one_by_id(user_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User"))?;

        if user.is_verified() {
            return Err(UseCaseError::Conflict {
                field: "email".to_string(),
            });
        }

        let session_id = Uuid::new_v4();
        let session = Session::create(
            SessionCreateParams {
                user_id: user.id.to_string(),
                token: SessionTokenParams {
                    value: json!({ "userId": user.id, "sessionId": session_id }),
                    options: TokenOptions::expires_in(self.expires_in.as_str()),
                },
                token_type: TokenType::EmailVerification.to_string(),
            },
            Some(session_id),
            &self.codec,
        )?;
        let session = self.sessions.create(session).await?;

        self.mailer
            .send_verification_email(user.id, user.email.as_str(), session.token().value())
            .await
            .map_err(|message| {
                error!(user_id = %user.id, error = %message, "Verification email delivery failed");
                UseCaseError::Internal { message }
            })?;

        info!(user_id = %user.id, session_id = %session.id(), "Verification email sent");
        Ok(())
    }
}

/// Sends the first verification email on registration
#[async_trait]
impl<U, S, M> UserCreatedHandler for SendEmailVerification<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: VerificationMailer + ?Sized,
{
    async fn handle(&self, event: &UserCreated) -> Result<(), String> {
        self.execute(event.user_id).await.map_err(|e| e.to_string())
    }
}
