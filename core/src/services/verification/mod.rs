//! Email verification delivery

mod traits;

pub use traits::VerificationMailer;
