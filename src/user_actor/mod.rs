//! User registry: entity implementation, errors and seed data.

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::clients::UserClient;
use crate::config::RegistryConfig;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client, seeded when the config asks for it.
pub fn new(config: &RegistryConfig) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(config.buffer_size);
    let actor = if config.seed {
        actor.with_entities(seed::users())
    } else {
        actor
    };

    (actor, UserClient::new(generic_client))
}
