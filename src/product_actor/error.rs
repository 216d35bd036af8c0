use thiserror::Error;

use crate::actor_framework::{EntityId, FrameworkError};

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(EntityId),
    #[error("Product code already exists: {0}")]
    DuplicateCode(String),
    #[error("Product request rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            // `Product::validate_create` reports a conflict with the taken code as its message.
            FrameworkError::Conflict(code) => ProductError::DuplicateCode(code),
            FrameworkError::Rejected(reason) => ProductError::Rejected(reason),
            FrameworkError::IdsExhausted => ProductError::Rejected(e.to_string()),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ProductError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
