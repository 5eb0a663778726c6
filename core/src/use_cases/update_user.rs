//! Partial update of a user's profile

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::UserUpdateParams;
use crate::repositories::UserRepository;

use super::dto::UserDto;
use super::errors::UseCaseError;

pub struct UpdateUser<U: UserRepository> {
    users: Arc<U>,
    hash_cost: u32,
}

impl<U: UserRepository> UpdateUser<U> {
    pub fn new(users: Arc<U>, hash_cost: u32) -> Self {
        Self { users, hash_cost }
    }

    pub async fn execute(
        &self,
        id: Uuid,
        params: UserUpdateParams,
    ) -> Result<UserDto, UseCaseError> {
        let mut user = self
            .users
            .find_one_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User"))?;

        user.apply_update(params, self.hash_cost)?;
        let user = self.users.update(user).await?;
        info!(user_id = %user.id, "User updated");

        Ok(UserDto::from(&user))
    }
}
