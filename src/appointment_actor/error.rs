use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::dress_actor::DressError;

/// Errors that can occur during appointment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(String),
    #[error("Appointment validation error: {0}")]
    ValidationError(String),
    #[error("Dress lookup failed: {0}")]
    DressLookup(DressError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AppointmentError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound { id, .. } => AppointmentError::NotFound(id),
            FrameworkError::Rejected(reason) => AppointmentError::ValidationError(reason),
            other => AppointmentError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<DressError> for AppointmentError {
    fn from(error: DressError) -> Self {
        AppointmentError::DressLookup(error)
    }
}
