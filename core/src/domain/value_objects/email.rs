//! Account email address.

use std::fmt;

use ft_shared::validation::is_valid_email;

use crate::errors::UserDomainError;

/// Email address, stored trimmed and lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn create(value: &str) -> Result<Self, UserDomainError> {
        let normalized = value.trim().to_lowercase();
        if !is_valid_email(&normalized) {
            return Err(UserDomainError::InvalidEmail);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let email = Email::create("  Valid@Email.COM ").unwrap();
        assert_eq!(email.as_str(), "valid@email.com");
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for value in ["", "invalid", "no-domain@", "@example.com", "a@b"] {
            assert_eq!(Email::create(value), Err(UserDomainError::InvalidEmail));
        }
    }
}
