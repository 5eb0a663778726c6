//! Domain entities: users and the sessions issued to them.

pub mod session;
pub mod user;

#[cfg(test)]
mod tests;

pub use session::{Session, SessionCreateParams, SessionParts, SessionTokenParams};
pub use user::{User, UserCreateParams, UserUpdateParams};
