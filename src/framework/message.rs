//! # Generic Messages
//!
//! The request envelope sent from `ResourceClient` to `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the registry operations:
///
/// - **Create**: Validates the payload, checks the key is free and inserts. Replies with the stored entity.
/// - **Get**: Fetches a copy of one entity by key.
/// - **List**: Fetches a copy of every stored entity, in no particular order.
/// - **Update**: Validates, looks up, applies the update to a draft and commits it.
/// - **Delete**: Removes the entity and replies with what was removed.
/// - **Action**: Executes a custom [`ActorEntity::Action`] on one entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
