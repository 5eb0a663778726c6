//! In-process storage adapters for the core repository ports.
//!
//! Both repositories keep persistence records, not domain objects, and go
//! through the core mappers on every read and write.

mod memory_session_repository;
mod memory_user_repository;

pub use memory_session_repository::InMemorySessionRepository;
pub use memory_user_repository::InMemoryUserRepository;
