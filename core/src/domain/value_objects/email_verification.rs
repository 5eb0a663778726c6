//! Whether a user has proven ownership of their email address.

/// Once verified, never unverified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailVerification(bool);

impl EmailVerification {
    pub fn new(is_verified: bool) -> Self {
        Self(is_verified)
    }

    pub fn verify_email(&mut self) {
        self.0 = true;
    }

    pub fn is_verified(&self) -> bool {
        self.0
    }
}
