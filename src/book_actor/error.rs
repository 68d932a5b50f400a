//! Error types for the Book actor.

use crate::model::ValidationError;
use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The requested book was not found.
    #[error("Book with ID {0} not found")]
    NotFound(String),

    /// The payload or query broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for BookError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => BookError::NotFound(id),
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}
