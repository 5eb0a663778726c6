//! Wiring of configuration, storage adapters and use cases

use std::sync::Arc;

use ft_core::services::{TokenCodec, VerificationMailer};
use ft_core::use_cases::{
    CreateUser, DeleteUser, GetUser, ListUsers, Login, SendEmailVerification, UpdateUser,
    VerifyEmail,
};
use ft_shared::config::AppConfig;

use crate::config::load_config;
use crate::error::InfraError;
use crate::mailer::TracingVerificationMailer;
use crate::persistence::{InMemorySessionRepository, InMemoryUserRepository};
use crate::telemetry::init_tracing;

/// Long-lived collaborators shared by every request
#[derive(Clone)]
pub struct AppServices {
    config: AppConfig,
    codec: TokenCodec,
    users: Arc<InMemoryUserRepository>,
    sessions: Arc<InMemorySessionRepository>,
    mailer: Arc<dyn VerificationMailer>,
}

impl AppServices {
    /// Build the signer, cipher and storage from configuration
    pub fn new(config: AppConfig) -> Result<Self, InfraError> {
        let codec = TokenCodec::from_config(&config.auth)?;
        let sessions = Arc::new(InMemorySessionRepository::new(codec.clone()));

        Ok(Self {
            config,
            codec,
            users: Arc::new(InMemoryUserRepository::new()),
            sessions,
            mailer: Arc::new(TracingVerificationMailer::new()),
        })
    }

    /// Replace the mail delivery adapter
    pub fn with_mailer(mut self, mailer: Arc<dyn VerificationMailer>) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn users(&self) -> &Arc<InMemoryUserRepository> {
        &self.users
    }

    pub fn sessions(&self) -> &Arc<InMemorySessionRepository> {
        &self.sessions
    }

    fn hash_cost(&self) -> u32 {
        self.config.auth.password.hash_cost
    }

    /// Registration sends the first verification email
    pub fn create_user(&self) -> CreateUser<InMemoryUserRepository> {
        CreateUser::new(self.users.clone(), self.hash_cost())
            .with_handler(Arc::new(self.send_email_verification()))
    }

    pub fn get_user(&self) -> GetUser<InMemoryUserRepository> {
        GetUser::new(self.users.clone())
    }

    pub fn list_users(&self) -> ListUsers<InMemoryUserRepository> {
        ListUsers::new(self.users.clone())
    }

    pub fn update_user(&self) -> UpdateUser<InMemoryUserRepository> {
        UpdateUser::new(self.users.clone(), self.hash_cost())
    }

    pub fn delete_user(&self) -> DeleteUser<InMemoryUserRepository> {
        DeleteUser::new(self.users.clone())
    }

    pub fn login(&self) -> Login<InMemoryUserRepository, InMemorySessionRepository> {
        Login::new(
            self.users.clone(),
            self.sessions.clone(),
            self.codec.clone(),
            self.config.auth.jwt.clone(),
        )
    }

    pub fn send_email_verification(
        &self,
    ) -> SendEmailVerification<InMemoryUserRepository, InMemorySessionRepository, dyn VerificationMailer>
    {
        SendEmailVerification::new(
            self.users.clone(),
            self.sessions.clone(),
            self.mailer.clone(),
            self.codec.clone(),
            self.config.auth.jwt.email_verification_expires_in.clone(),
        )
    }

    pub fn verify_email(&self) -> VerifyEmail<InMemoryUserRepository, InMemorySessionRepository> {
        VerifyEmail::new(self.users.clone(), self.sessions.clone(), self.codec.clone())
    }
}

/// Load configuration, install logging and build the services
pub fn initialize() -> Result<AppServices, InfraError> {
    let config = load_config()?;
    init_tracing(&config.logging)?;
    tracing::info!(environment = %config.environment, "Initializing FitTrack services");
    AppServices::new(config)
}
