use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during login.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AuthError {
    fn from(error: FrameworkError) -> Self {
        AuthError::ActorCommunicationError(error.to_string())
    }
}
