//! # User Client
//!
//! High-level API for the `User` actor, including avatar upload from any
//! [`AsyncRead`] source.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{User, UserAction, UserCreate, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, instrument, warn};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(name) => UserError::NotFound(name),
            FrameworkError::AlreadyExists(name) => UserError::AlreadyExists(name),
            other => other
                .into_entity_error::<UserError>()
                .unwrap_or_else(|e| UserError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl UserClient {
    /// Every registered user, in no particular order.
    pub async fn get_all(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }

    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, UserError> {
        self.get(user_name.to_string()).await
    }

    #[instrument(skip(self, user), fields(user_name = %user.user_name))]
    pub async fn create_user(&self, user: UserCreate) -> Result<User, UserError> {
        debug!(?user, "create_user called");
        self.inner.create(user).await.map_err(Self::map_error)
    }

    /// Replaces each non-blank field of `update` and bumps `last_updated`.
    #[instrument(skip(self, update))]
    pub async fn update_user(&self, user_name: &str, update: UserUpdate) -> Result<User, UserError> {
        debug!(?update, "update_user called");
        self.inner
            .update(user_name.to_string(), update)
            .await
            .map_err(Self::map_error)
    }

    /// Reads `reader` to the end and stores the bytes as the user's avatar.
    ///
    /// The stream is drained here, on the caller's task, so a slow upload never holds
    /// up the actor. A read failure returns [`UserError::Io`] and leaves the previous
    /// avatar in place.
    #[instrument(skip(self, reader))]
    pub async fn update_avatar<R>(&self, user_name: &str, mut reader: R) -> Result<User, UserError>
    where
        R: AsyncRead + Unpin + Send,
    {
        if self.find_by_user_name(user_name).await?.is_none() {
            return Err(UserError::NotFound(user_name.to_string()));
        }

        let mut bytes = Vec::new();
        if let Err(e) = reader.read_to_end(&mut bytes).await {
            warn!(error = %e, "Avatar stream failed");
            return Err(UserError::Io(e.to_string()));
        }
        debug!(size = bytes.len(), "Avatar read");

        self.inner
            .perform_action(user_name.to_string(), UserAction::ReplaceAvatar(bytes))
            .await
            .map_err(Self::map_error)
    }

    /// The stored avatar bytes, or `None` when the user has never uploaded one.
    ///
    /// An unknown user is [`UserError::NotFound`].
    pub async fn avatar(&self, user_name: &str) -> Result<Option<Vec<u8>>, UserError> {
        self.find_by_user_name(user_name)
            .await?
            .map(|user| user.avatar)
            .ok_or_else(|| UserError::NotFound(user_name.to_string()))
    }
}
