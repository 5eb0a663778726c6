//! Mock implementation of SessionRepository for testing
//!
//! Sessions round-trip through [`SessionMapper`] so the stored token is
//! ciphertext, as it would be in a real table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Session;
use crate::domain::value_objects::TokenType;
use crate::errors::RepositoryError;
use crate::mappers::{Mapper, SessionMapper, SessionRecord};
use crate::services::TokenCodec;

use super::trait_::SessionRepository;

/// Mock session repository for testing
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
    mapper: SessionMapper,
    update_calls: AtomicUsize,
    consume_calls: AtomicUsize,
}

impl MockSessionRepository {
    pub fn new(codec: TokenCodec) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            mapper: SessionMapper::new(codec),
            update_calls: AtomicUsize::new(0),
            consume_calls: AtomicUsize::new(0),
        }
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn consume_calls(&self) -> usize {
        self.consume_calls.load(Ordering::SeqCst)
    }

    /// Stored record of a session
    pub async fn record(&self, id: Uuid) -> Option<SessionRecord> {
        self.sessions.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn find_last_by_user_id_and_type(
        &self,
        user_id: Uuid,
        token_type: TokenType,
    ) -> Result<Option<Session>, RepositoryError> {
        let sessions = self.sessions.read().await;
        let last = sessions
            .values()
            .filter(|r| r.user_id == user_id && r.token_type == token_type.as_str())
            .max_by_key(|r| r.created_at)
            .cloned();
        drop(sessions);

        last.map(|record| self.mapper.to_domain(record)).transpose()
    }

    async fn create(&self, session: Session) -> Result<Session, RepositoryError> {
        let record = self.mapper.to_persistence(&session)?;
        self.sessions.write().await.insert(record.id, record);
        Ok(session)
    }

    async fn update(&self, session: Session) -> Result<Session, RepositoryError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let record = self.mapper.to_persistence(&session)?;

        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&record.id) {
            return Err(RepositoryError::not_found("Session"));
        }
        sessions.insert(record.id, record);
        Ok(session)
    }

    async fn consume(
        &self,
        session_id: Uuid,
        used_at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        self.consume_calls.fetch_add(1, Ordering::SeqCst);

        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get_mut(&session_id)
            .ok_or_else(|| RepositoryError::not_found("Session"))?;

        if record.used_at.is_some() {
            return Ok(false);
        }
        record.used_at = Some(used_at);
        Ok(true)
    }
}
