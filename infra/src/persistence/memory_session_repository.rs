//! `sessions` table kept in memory

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ft_core::domain::{Session, TokenType};
use ft_core::errors::RepositoryError;
use ft_core::mappers::{Mapper, SessionMapper, SessionRecord};
use ft_core::repositories::SessionRepository;
use ft_core::services::TokenCodec;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Session storage with tokens kept as ciphertext
#[derive(Clone)]
pub struct InMemorySessionRepository {
    records: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
    mapper: SessionMapper,
}

impl InMemorySessionRepository {
    pub fn new(codec: TokenCodec) -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            mapper: SessionMapper::new(codec),
        }
    }

    pub async fn record(&self, id: Uuid) -> Option<SessionRecord> {
        self.records.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_last_by_user_id_and_type(
        &self,
        user_id: Uuid,
        token_type: TokenType,
    ) -> Result<Option<Session>, RepositoryError> {
        let last = {
            let records = self.records.read().await;
            records
                .values()
                .filter(|r| r.user_id == user_id && r.token_type == token_type.as_str())
                .max_by_key(|r| r.created_at)
                .cloned()
        };
        last.map(|record| self.mapper.to_domain(record)).transpose()
    }

    async fn create(&self, session: Session) -> Result<Session, RepositoryError> {
        let record = self.mapper.to_persistence(&session)?;
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict {
                field: "id".to_string(),
            });
        }
        records.insert(record.id, record);
        Ok(session)
    }

    async fn update(&self, session: Session) -> Result<Session, RepositoryError> {
        let record = self.mapper.to_persistence(&session)?;
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(RepositoryError::not_found("Session"));
        }
        records.insert(record.id, record);
        Ok(session)
    }

    async fn consume(
        &self,
        session_id: Uuid,
        used_at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&session_id)
            .ok_or_else(|| RepositoryError::not_found("Session"))?;

        if record.used_at.is_some() {
            tracing::debug!(session_id = %session_id, "Session already consumed");
            return Ok(false);
        }
        record.used_at = Some(used_at);
        Ok(true)
    }
}
