//! Session repository trait defining the interface for session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::Session;
use crate::domain::value_objects::TokenType;
use crate::errors::RepositoryError;

/// Repository trait for Session persistence operations
///
/// Session tokens are stored encrypted; implementations go through
/// [`SessionMapper`](crate::mappers::SessionMapper) or an equivalent.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Most recently created session of the given type for a user
    async fn find_last_by_user_id_and_type(
        &self,
        user_id: Uuid,
        token_type: TokenType,
    ) -> Result<Option<Session>, RepositoryError>;

    async fn create(&self, session: Session) -> Result<Session, RepositoryError>;

    /// Overwrite an existing session
    async fn update(&self, session: Session) -> Result<Session, RepositoryError>;

    /// Atomically mark a session as used if it is not used yet
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the session
    /// * `Ok(false)` - The session had already been consumed
    /// * `Err(RepositoryError::NotFound)` - No such session
    async fn consume(&self, session_id: Uuid, used_at: DateTime<Utc>)
        -> Result<bool, RepositoryError>;
}
