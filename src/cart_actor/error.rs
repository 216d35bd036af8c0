use thiserror::Error;

use crate::actor_framework::{EntityId, FrameworkError};

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(EntityId),
    #[error("Cart request rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::Conflict(reason) | FrameworkError::Rejected(reason) => {
                CartError::Rejected(reason)
            }
            FrameworkError::IdsExhausted => CartError::Rejected(e.to_string()),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                CartError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
