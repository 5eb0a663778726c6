//! Type definitions shared across crates
//!
//! - `pagination` - Pagination for list endpoints

pub mod pagination;

pub use pagination::{PaginatedResponse, Pagination};
