//! Public account handle.

use std::fmt;

use ft_shared::validation::is_valid_username;

use crate::errors::UserDomainError;

/// 3 to 30 characters drawn from letters, digits, `_`, `.` and `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn create(value: &str) -> Result<Self, UserDomainError> {
        if !is_valid_username(value) {
            return Err(UserDomainError::InvalidUsername);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
