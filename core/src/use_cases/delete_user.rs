//! Soft-delete a user

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::repositories::UserRepository;

use super::errors::UseCaseError;

pub struct DeleteUser<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> DeleteUser<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, id: Uuid) -> Result<(), UseCaseError> {
        if self.users.find_one_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found("User"));
        }

        self.users.delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
