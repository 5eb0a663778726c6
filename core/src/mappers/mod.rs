//! Conversions between domain aggregates and their persistence records.

mod records;
mod session_mapper;
mod user_mapper;

pub use records::{SessionRecord, UserRecord};
pub use session_mapper::SessionMapper;
pub use user_mapper::UserMapper;

use crate::errors::RepositoryError;

/// Two-way conversion between a domain type `T` and its stored form `D`
pub trait Mapper<T, D> {
    /// Rebuild and re-validate a domain value from storage
    fn to_domain(&self, raw: D) -> Result<T, RepositoryError>;

    fn to_persistence(&self, item: &T) -> Result<D, RepositoryError>;
}
