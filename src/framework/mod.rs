//! Generic actor framework for keyed resource registries.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a keyed store of entities
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests to an actor
//! - [`ActorClient`] - Shared `get` / `list` / `delete` for typed clients
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
