//! Shared building blocks: identifiers, the validation error, and the
//! entity/value-object traits. No IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EntryId, UserId};
pub use value_object::ValueObject;
