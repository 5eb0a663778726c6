//! User repository trait defining the interface for user persistence.
//!
//! Implementations own uniqueness of `username` and `email` and hide
//! soft-deleted users from every lookup.

use async_trait::async_trait;
use ft_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::RepositoryError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live user by id
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id, or the user is deleted
    /// * `Err(RepositoryError)` - Storage or mapping failure
    async fn find_one_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Find a live user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Find a live user by email; the lookup is case-insensitive
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// One page of live users, oldest first, with the total number of live users
    async fn list(&self, pagination: &Pagination) -> Result<(Vec<User>, u64), RepositoryError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(RepositoryError::Conflict)` - Username or email already taken
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Overwrite an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(RepositoryError::NotFound)` - No such user
    /// * `Err(RepositoryError::Conflict)` - New username or email already taken
    async fn update(&self, user: User) -> Result<User, RepositoryError>;

    /// Soft-delete a user
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
