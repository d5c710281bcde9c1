//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod employee;
pub mod product;
pub mod user;

pub use employee::*;
pub use product::*;
pub use user::*;

/// True when the value holds at least one non-whitespace character.
pub(crate) fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}
