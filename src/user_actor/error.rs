//! Error types for the User registry.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The submitted user failed validation.
    #[error("{0}")]
    ValidationError(String),

    /// A user with this username is already registered.
    #[error("Specified username is already taken.")]
    AlreadyExists(String),

    /// No user is registered under this username.
    #[error("User with specified username does not exist.")]
    NotFound(String),

    /// Reading an avatar stream failed. Nothing was stored.
    #[error("Failed to read avatar: {0}")]
    Io(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    pub(crate) fn invalid(reason: &str) -> Self {
        UserError::ValidationError(format!("Invalid user definition! {reason}"))
    }
}
