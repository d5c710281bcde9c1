//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a registry's entities.
//! It processes messages sequentially, so every operation has exclusive access to the store.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities keyed by their natural id.
///
/// # Concurrency Model
/// The actor is the "server" half: it owns the `store` and the receiving end of the
/// channel. Any number of cloned [`ResourceClient`]s may send to it concurrently, but the
/// actor handles one request at a time. That is what makes create race-free: the
/// "is this key taken?" check and the insert happen inside a single message, and no other
/// message can run between them. No `Mutex` or `RwLock` guards the store.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` and its `client`.
/// 2.  **Seed**: Optionally preload entities with [`ResourceActor::with_entities`].
/// 3.  **Run**: Spawn `actor.run(context)` in a background task.
///
/// # Operations
///
/// * **Create**: `from_create_params` (validation) → key check → `on_create` → insert.
/// * **Get** / **List**: clone entities out of the store.
/// * **Update**: `validate_update` → lookup → `on_update` on a draft → commit the draft.
/// * **Delete**: lookup → `on_delete` → remove, replying with the removed entity.
/// * **Action**: lookup → `handle_action` on a draft → commit the draft on success.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Preloads the store. Later entries replace earlier ones with the same key.
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = T>) -> Self {
        for entity in entities {
            self.store.insert(entity.id(), entity);
        }
        self
    }

    /// Number of entities currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "resource_registry::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(entity_error)?;
        let id = item.id();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        item.on_create(context).await.map_err(entity_error)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        T::validate_update(id, &update).map_err(entity_error)?;
        let stored = self
            .store
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut draft = stored.clone();
        draft.on_update(update, context).await.map_err(entity_error)?;
        *stored = draft.clone();
        Ok(draft)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store
            .remove(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let stored = self
            .store
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut draft = stored.clone();
        let result = draft
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;
        *stored = draft;
        Ok(result)
    }
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}
