//! `depot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! entity identity, the aggregate root marker, validated value objects and the
//! check/ensure validation primitives.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::{Entity, entity_eq};
pub use error::{DomainError, DomainResult, ErrorKey, Rule, ValidationErrors};
pub use id::AggregateId;
pub use validation::{Combine, check, combine, combine_all, ensure};
pub use value_object::{Code, Name, ShortDescription, ValueObject};

#[doc(hidden)]
pub mod __private {
    pub use uuid::Uuid;
}
