//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use ft_shared::types::Pagination;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::RepositoryError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    update_calls: AtomicUsize,
    fail_updates: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            update_calls: AtomicUsize::new(0),
            fail_updates: AtomicBool::new(false),
        }
    }

    /// Number of `update` calls so far, failed ones included
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Make every following `update` fail with a storage error
    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }

    /// Stored user regardless of deletion state
    pub async fn stored(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    fn check_unique(users: &HashMap<Uuid, User>, user: &User) -> Result<(), RepositoryError> {
        for other in users.values().filter(|u| u.id != user.id) {
            if other.username == user.username {
                return Err(RepositoryError::Conflict {
                    field: "username".to_string(),
                });
            }
            if other.email == user.email {
                return Err(RepositoryError::Conflict {
                    field: "email".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_one_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(&id).filter(|u| !u.is_deleted()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| !u.is_deleted() && u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = email.trim().to_lowercase();
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| !u.is_deleted() && u.email.as_str() == email)
            .cloned())
    }

    async fn list(&self, pagination: &Pagination) -> Result<(Vec<User>, u64), RepositoryError> {
        let users = self.users.read().await;
        let mut live: Vec<User> = users.values().filter(|u| !u.is_deleted()).cloned().collect();
        live.sort_by_key(|u| (u.created_at, u.id));

        let total = live.len() as u64;
        let page = live
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit())
            .collect();
        Ok((page, total))
    }

    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepositoryError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage {
                message: "update failed".to_string(),
            });
        }

        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(RepositoryError::not_found("User"));
        }
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id).filter(|u| !u.is_deleted()) {
            Some(user) => {
                user.soft_delete();
                Ok(())
            }
            None => Err(RepositoryError::not_found("User")),
        }
    }
}
