//! Value objects validating individual domain attributes.

pub mod body_metric;
pub mod email;
pub mod email_verification;
pub mod password;
pub mod token;
pub mod token_type;
pub mod username;

pub use body_metric::BodyMetric;
pub use email::Email;
pub use email_verification::EmailVerification;
pub use password::Password;
pub use token::{Token, TokenOptions, TokenProps};
pub use token_type::TokenType;
pub use username::Username;
