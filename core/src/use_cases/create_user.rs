//! Register a new user account

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{User, UserCreateParams};
use crate::domain::events::{UserCreated, UserCreatedHandler};
use crate::repositories::UserRepository;

use super::dto::UserDto;
use super::errors::UseCaseError;

/// Registration input
#[derive(Debug, Clone, Default)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub height: Option<u32>,
}

pub struct CreateUser<U: UserRepository> {
    users: Arc<U>,
    hash_cost: u32,
    handlers: Vec<Arc<dyn UserCreatedHandler>>,
}

impl<U: UserRepository> CreateUser<U> {
    pub fn new(users: Arc<U>, hash_cost: u32) -> Self {
        Self {
            users,
            hash_cost,
            handlers: Vec::new(),
        }
    }

    /// Subscribe a handler to [`UserCreated`]
    pub fn with_handler(mut self, handler: Arc<dyn UserCreatedHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Validate, hash the password and persist a new user, then raise
    /// [`UserCreated`] to every subscribed handler.
    ///
    /// # Returns
    ///
    /// * `Ok(UserDto)` - the stored user
    /// * `Err(UseCaseError::InvalidUser)` - a field failed validation
    /// * `Err(UseCaseError::Conflict)` - username or email already taken
    pub async fn execute(&self, params: CreateUserParams) -> Result<UserDto, UseCaseError> {
        let user = User::create(
            UserCreateParams {
                username: params.username,
                email: params.email,
                password: params.password,
                age: params.age,
                weight: params.weight,
                height: params.height,
                ..Default::default()
            },
            None,
            self.hash_cost,
        )?;

        if self.users.find_by_username(user.username.as_str()).await?.is_some() {
            return Err(UseCaseError::Conflict {
                field: "username".to_string(),
            });
        }
        if self.users.find_by_email(user.email.as_str()).await?.is_some() {
            return Err(UseCaseError::Conflict {
                field: "email".to_string(),
            });
        }

        let user = self.users.create(user).await?;
        info!(user_id = %user.id, "User created");

        self.publish(&UserCreated::new(&user)).await;
        Ok(UserDto::from(&user))
    }

    async fn publish(&self, event: &UserCreated) {
        for handler in &self.handlers {
            if let Err(error) = handler.handle(event).await {
                warn!(user_id = %event.user_id, error = %error, "UserCreated handler failed");
            }
        }
    }
}
