use thiserror::Error;

use crate::appointment_actor::AppointmentError;
use crate::config::ConfigError;
use crate::dress_actor::DressError;

/// Errors raised by the system coordinator itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dress(#[from] DressError),
    #[error(transparent)]
    Appointment(#[from] AppointmentError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
