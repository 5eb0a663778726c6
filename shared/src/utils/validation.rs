//! Field format rules for user-supplied account data

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 3;
/// Maximum username length
pub const USERNAME_MAX_LENGTH: usize = 30;
/// Minimum plaintext password length
pub const PASSWORD_MIN_LENGTH: usize = 6;
/// Maximum plaintext password length (bcrypt truncates beyond 72 bytes)
pub const PASSWORD_MAX_LENGTH: usize = 72;
/// Maximum email length (RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid username regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Check if a string is not empty
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length (in characters) is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if a username is well-formed
pub fn is_valid_username(username: &str) -> bool {
    length_between(username, USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH)
        && USERNAME_REGEX.is_match(username)
}

/// Check if an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Check if a plaintext password satisfies the length policy
pub fn is_valid_password(password: &str) -> bool {
    not_empty(password) && password.len() >= PASSWORD_MIN_LENGTH && password.len() <= PASSWORD_MAX_LENGTH
}
