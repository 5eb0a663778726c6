//! `users` table kept in memory

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use ft_core::domain::User;
use ft_core::errors::RepositoryError;
use ft_core::mappers::{Mapper, UserMapper, UserRecord};
use ft_core::repositories::UserRepository;
use ft_shared::types::Pagination;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    records: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
    mapper: UserMapper,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored record regardless of deletion state
    pub async fn record(&self, id: Uuid) -> Option<UserRecord> {
        self.records.read().await.get(&id).cloned()
    }

    fn check_unique(
        records: &HashMap<Uuid, UserRecord>,
        candidate: &UserRecord,
    ) -> Result<(), RepositoryError> {
        for other in records.values().filter(|r| r.id != candidate.id) {
            if other.username == candidate.username {
                return Err(RepositoryError::Conflict {
                    field: "username".to_string(),
                });
            }
            if other.email == candidate.email {
                return Err(RepositoryError::Conflict {
                    field: "email".to_string(),
                });
            }
        }
        Ok(())
    }

    async fn find_live<F>(&self, predicate: F) -> Result<Option<User>, RepositoryError>
    where
        F: Fn(&UserRecord) -> bool + Send,
    {
        let found = {
            let records = self.records.read().await;
            records
                .values()
                .find(|r| r.deleted_at.is_none() && predicate(r))
                .cloned()
        };
        found.map(|record| self.mapper.to_domain(record)).transpose()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_one_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        self.find_live(|r| r.id == id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.find_live(|r| r.username == username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = email.trim().to_lowercase();
        self.find_live(|r| r.email == email).await
    }

    async fn list(&self, pagination: &Pagination) -> Result<(Vec<User>, u64), RepositoryError> {
        let mut live: Vec<UserRecord> = {
            let records = self.records.read().await;
            records
                .values()
                .filter(|r| r.deleted_at.is_none())
                .cloned()
                .collect()
        };
        live.sort_by_key(|r| (r.created_at, r.id));

        let total = live.len() as u64;
        let users = live
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit())
            .map(|record| self.mapper.to_domain(record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let record = self.mapper.to_persistence(&user)?;
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict {
                field: "id".to_string(),
            });
        }
        Self::check_unique(&records, &record)?;
        records.insert(record.id, record);
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepositoryError> {
        let record = self.mapper.to_persistence(&user)?;
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(RepositoryError::not_found("User"));
        }
        Self::check_unique(&records, &record)?;
        records.insert(record.id, record);
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .filter(|r| r.deleted_at.is_none())
            .ok_or_else(|| RepositoryError::not_found("User"))?;

        let now = Utc::now();
        record.deleted_at = Some(now);
        record.updated_at = now;
        tracing::debug!(user_id = %id, "User record soft-deleted");
        Ok(())
    }
}
