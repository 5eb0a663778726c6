//! Port for delivering email verification tokens

use async_trait::async_trait;
use uuid::Uuid;

/// Trait for email delivery integration
#[async_trait]
pub trait VerificationMailer: Send + Sync {
    /// Deliver a verification token to the user's email address
    async fn send_verification_email(
        &self,
        user_id: Uuid,
        email: &str,
        token: &str,
    ) -> Result<(), String>;
}
