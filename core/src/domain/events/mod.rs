//! Domain events raised by aggregates once their changes are stored

mod user_created;

pub use user_created::{UserCreated, UserCreatedHandler};
