//! # Resource Registry
//!
//! > **Product, user and employee registries behind a small REST API.**
//!
//! Each registry is an in-memory map owned by a single Tokio task (a resource actor).
//! Request handlers talk to it through cheap, cloneable clients, so uniqueness checks
//! and inserts never race and no lock guards the data.
//!
//! ## 🏗️ Design
//!
//! ### Natural keys
//! Products are keyed by `code` and users by `userName`. The actor asks each new
//! entity for its key and refuses the insert when the key is taken; that check and the
//! insert run inside one message.
//!
//! ### Validate, then look up
//! Create and update payloads are validated before the actor consults its map, so a
//! malformed request is reported as such even when the target is missing.
//!
//! ### Copy out, commit on success
//! Readers always receive clones. Updates and actions mutate a draft copy that replaces
//! the stored entity only when the hook returns `Ok`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) trait, plus mock helpers for client tests.
//!
//! ### 2. The Registries ([`product_actor`], [`user_actor`])
//! `ActorEntity` implementations with their validation rules, error enums and seed data.
//!
//! ### 3. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) and [`UserClient`](clients::UserClient)
//! expose registry operations and map framework errors to registry errors.
//!
//! ### 4. The Edge ([`api`], [`config`], [`lifecycle`])
//! axum routes, environment configuration, and the
//! [`RegistrySystem`](lifecycle::RegistrySystem) that starts and stops the actors.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -s localhost:8080/products
//! curl -s -X POST localhost:8080/users -H 'content-type: application/json' \
//!   -d '{"userName":"marla","firstName":"Marla","surname":"Singer","email":"marla@fc.com"}'
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
