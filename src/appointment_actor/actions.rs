use crate::domain::{Appointment, AppointmentStatus};

/// Custom actions for Appointment entities.
///
/// Neither action checks transition legality; the admin screens decide which
/// buttons to offer (see [`AppointmentStatus::next_steps`]).
#[derive(Debug, Clone)]
pub enum AppointmentAction {
    /// Overwrites the status, leaving every other field untouched.
    UpdateStatus(AppointmentStatus),
    /// Marks the appointment as canceled.
    Cancel,
}

/// Results from AppointmentActions - variants match 1:1 with AppointmentAction
#[derive(Debug, Clone)]
pub enum AppointmentActionResult {
    /// The appointment after the status change.
    UpdateStatus(Appointment),
    /// The status the appointment had before it was canceled.
    Cancel(AppointmentStatus),
}
