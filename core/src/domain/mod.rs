//! Domain layer containing entities, the value objects they are built from
//! and the events they raise.

pub mod entities;
pub mod events;
pub mod value_objects;

pub use entities::*;
pub use events::*;
pub use value_objects::*;
