use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::User;

/// A new account has been stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreated {
    pub user_id: Uuid,
    pub email: String,
    pub occurred_at: DateTime<Utc>,
}

impl UserCreated {
    pub fn new(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            occurred_at: Utc::now(),
        }
    }
}

/// Subscriber notified after a user is created.
///
/// A failing handler does not undo the registration.
#[async_trait]
pub trait UserCreatedHandler: Send + Sync {
    async fn handle(&self, event: &UserCreated) -> Result<(), String>;
}
