//! Error types for the Product registry.

use thiserror::Error;

/// Errors that can occur during product operations.
///
/// The `Display` text of the first three variants is what HTTP clients see.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The submitted product failed validation.
    #[error("{0}")]
    ValidationError(String),

    /// A product with this code is already stored.
    #[error("Specified productCode is already taken.")]
    AlreadyExists(String),

    /// No product is stored under this code.
    #[error("Product with given code does not exists")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub(crate) fn invalid(reason: &str) -> Self {
        ProductError::ValidationError(format!("Invalid product definition! {reason}"))
    }
}
