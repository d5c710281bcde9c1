//! Product registry: entity implementation, errors and seed data.

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::clients::ProductClient;
use crate::config::RegistryConfig;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client, seeded when the config asks for it.
pub fn new(config: &RegistryConfig) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(config.buffer_size);
    let actor = if config.seed {
        actor.with_entities(seed::products())
    } else {
        actor
    };

    (actor, ProductClient::new(generic_client))
}
