//! Verification mail delivery that only records the delivery in the log

use async_trait::async_trait;
use ft_core::services::VerificationMailer;
use tracing::info;
use uuid::Uuid;

/// Logs each delivery instead of sending it. The token is never logged.
#[derive(Debug, Clone, Default)]
pub struct TracingVerificationMailer;

impl TracingVerificationMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VerificationMailer for TracingVerificationMailer {
    async fn send_verification_email(
        &self,
        user_id: Uuid,
        email: &str,
        _token: &str,
    ) -> Result<(), String> {
        info!(user_id = %user_id, email = %mask_email(email), "Verification email dispatched");
        Ok(())
    }
}

/// Mask the local part of an email address for logging
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
