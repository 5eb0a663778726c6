//! Look up a user by id or username

use std::sync::Arc;

use uuid::Uuid;

use crate::repositories::UserRepository;

use super::dto::UserDto;
use super::errors::UseCaseError;

pub struct GetUser<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> GetUser<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// `id_or_username` is tried as a UUID first, then as a username
    pub async fn execute(&self, id_or_username: &str) -> Result<UserDto, UseCaseError> {
        let user = match Uuid::parse_str(id_or_username) {
            Ok(id) => self.users.find_one_by_id(id).await?,
            Err(_) => self.users.find_by_username(id_or_username).await?,
        };

        user.as_ref()
            .map(UserDto::from)
            .ok_or_else(|| UseCaseError::not_found("User"))
    }
}
