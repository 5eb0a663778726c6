//! Paginated listing of live users

use std::sync::Arc;

use ft_shared::types::{PaginatedResponse, Pagination};

use crate::repositories::UserRepository;

use super::dto::UserDto;
use super::errors::UseCaseError;

pub struct ListUsers<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> ListUsers<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<UserDto>, UseCaseError> {
        let pagination = pagination.validate();
        let (users, total) = self.users.list(&pagination).await?;
        let data = users.iter().map(UserDto::from).collect();
        Ok(PaginatedResponse::new(data, pagination, total))
    }
}
