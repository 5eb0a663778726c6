//! User aggregate <-> `users` row

use crate::domain::entities::User;
use crate::domain::value_objects::{BodyMetric, Email, EmailVerification, Password, Username};
use crate::errors::RepositoryError;

use super::{Mapper, UserRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl Mapper<User, UserRecord> for UserMapper {
    fn to_domain(&self, raw: UserRecord) -> Result<User, RepositoryError> {
        Ok(User {
            id: raw.id,
            username: Username::create(&raw.username).map_err(RepositoryError::mapping)?,
            email: Email::create(&raw.email).map_err(RepositoryError::mapping)?,
            password: Password::from_hash(raw.password).map_err(RepositoryError::mapping)?,
            age: raw
                .age
                .map(BodyMetric::age)
                .transpose()
                .map_err(RepositoryError::mapping)?,
            weight: raw
                .weight
                .map(BodyMetric::weight)
                .transpose()
                .map_err(RepositoryError::mapping)?,
            height: raw
                .height
                .map(BodyMetric::height)
                .transpose()
                .map_err(RepositoryError::mapping)?,
            is_email_verified: EmailVerification::new(raw.is_email_verified),
            is_admin: raw.is_admin,
            deleted_at: raw.deleted_at,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }

    fn to_persistence(&self, item: &User) -> Result<UserRecord, RepositoryError> {
        Ok(UserRecord {
            id: item.id,
            username: item.username.as_str().to_string(),
            email: item.email.as_str().to_string(),
            password: item.password.hash().to_string(),
            is_email_verified: item.is_email_verified.is_verified(),
            is_admin: item.is_admin,
            age: item.age.map(|m| m.value()),
            weight: item.weight.map(|m| m.value()),
            height: item.height.map(|m| m.value()),
            deleted_at: item.deleted_at,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}
