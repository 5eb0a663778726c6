//! # FitTrack Core
//!
//! Domain layer of the FitTrack backend: users, the sessions issued to them
//! and the signed tokens those sessions carry, together with the repository
//! ports and use cases built on top of them.

pub mod domain;
pub mod errors;
pub mod mappers;
pub mod repositories;
pub mod services;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{SessionRepository, UserRepository};
pub use services::*;
