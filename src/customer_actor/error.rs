use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during client record operations.
///
/// Client patches are never rejected, so there is no validation variant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ClientError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound { id, .. } => ClientError::NotFound(id),
            other => ClientError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_client_errors() {
        let missing = FrameworkError::NotFound {
            kind: "Client",
            id: "c9".to_string(),
        };
        assert_eq!(ClientError::from(missing), ClientError::NotFound("c9".to_string()));

        let rejected = FrameworkError::Rejected("bad patch".to_string());
        assert_eq!(
            ClientError::from(rejected),
            ClientError::ActorCommunicationError("bad patch".to_string())
        );
    }
}
