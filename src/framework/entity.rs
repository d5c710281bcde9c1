//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every registry resource (Product, User)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types
//! for the natural key, DTOs, actions, context and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Natural Keys
//! Entities are keyed by a value they carry themselves (a product code, a username), not by
//! an id the actor hands out. The actor asks the freshly built entity for its key through
//! [`ActorEntity::id`] and refuses the insert if that key is already taken. Because the actor
//! is the only owner of its map, that check and the insert can never interleave with another
//! create.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::validate_update`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default implementations do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook when the actor
/// starts running.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The natural key of this entity (e.g. a product code).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `ReplaceAvatar`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor, shared by every operation. Typed clients recover it from
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError)
    /// by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key under which this entity is stored.
    fn id(&self) -> Self::Id;

    /// Validate the payload and build the full entity.
    /// Called before the uniqueness check, so validation errors always win.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Validate an update payload before the target is looked up.
    fn validate_update(_id: &Self::Id, _update: &Self::Update) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update. Runs against a draft copy; the stored entity is only
    /// replaced when this returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
