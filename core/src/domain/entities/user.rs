//! User aggregate of the FitTrack account system.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{BodyMetric, Email, EmailVerification, Password, Username};
use crate::errors::UserDomainError;

/// Raw input for registering a user
#[derive(Debug, Clone, Default)]
pub struct UserCreateParams {
    pub username: String,
    pub email: String,
    /// Plaintext; hashed during creation
    pub password: String,
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub height: Option<u32>,
    pub is_email_verified: bool,
    pub is_admin: bool,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserUpdateParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub height: Option<u32>,
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: Username,
    pub email: Email,
    pub password: Password,
    pub age: Option<BodyMetric>,
    pub weight: Option<BodyMetric>,
    pub height: Option<BodyMetric>,
    pub is_email_verified: EmailVerification,
    pub is_admin: bool,
    /// Set when the account is soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Validate raw input and build a new user.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned. A v4 id is generated when `id` is `None`.
    pub fn create(
        params: UserCreateParams,
        id: Option<Uuid>,
        hash_cost: u32,
    ) -> Result<Self, UserDomainError> {
        let username = Username::create(&params.username)?;
        let email = Email::create(&params.email)?;
        let password = Password::create(&params.password, hash_cost)?;
        let age = params.age.map(BodyMetric::age).transpose()?;
        let weight = params.weight.map(BodyMetric::weight).transpose()?;
        let height = params.height.map(BodyMetric::height).transpose()?;

        let now = Utc::now();
        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            username,
            email,
            password,
            age,
            weight,
            height,
            is_email_verified: EmailVerification::new(params.is_email_verified),
            is_admin: params.is_admin,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update. Every provided field is validated before any
    /// is written, so a failed update leaves the user unchanged.
    pub fn apply_update(
        &mut self,
        params: UserUpdateParams,
        hash_cost: u32,
    ) -> Result<(), UserDomainError> {
        let username = params.username.as_deref().map(Username::create).transpose()?;
        let email = params.email.as_deref().map(Email::create).transpose()?;
        let age = params.age.map(BodyMetric::age).transpose()?;
        let weight = params.weight.map(BodyMetric::weight).transpose()?;
        let height = params.height.map(BodyMetric::height).transpose()?;
        let password = params
            .password
            .as_deref()
            .map(|plain| Password::create(plain, hash_cost))
            .transpose()?;

        if let Some(username) = username {
            self.username = username;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(password) = password {
            self.password = password;
        }
        if age.is_some() {
            self.age = age;
        }
        if weight.is_some() {
            self.weight = weight;
        }
        if height.is_some() {
            self.height = height;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Marks the email address as verified
    pub fn verify_email(&mut self) {
        self.is_email_verified.verify_email();
        self.updated_at = Utc::now();
    }

    pub fn is_verified(&self) -> bool {
        self.is_email_verified.is_verified()
    }

    /// Soft-deletes the account; repeated calls keep the first timestamp
    pub fn soft_delete(&mut self) {
        if self.deleted_at.is_none() {
            let now = Utc::now();
            self.deleted_at = Some(now);
            self.updated_at = now;
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
