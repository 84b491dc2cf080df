use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DressError {
    #[error("Dress not found: {0}")]
    NotFound(String),
    #[error("Dress validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DressError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound { id, .. } => DressError::NotFound(id),
            FrameworkError::Rejected(reason) => DressError::ValidationError(reason),
            other => DressError::ActorCommunicationError(other.to_string()),
        }
    }
}
