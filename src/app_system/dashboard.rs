use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Appointment, AppointmentStatus, Dress};

/// Headline numbers of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_dresses: usize,
    pub available_dresses: usize,
    /// Appointments on or after `today` that are not canceled, newest first.
    pub upcoming_appointments: Vec<Appointment>,
    pub confirmed_appointments: usize,
}

impl DashboardStats {
    /// `appointments` is expected in listing order (newest date first).
    pub fn compute(dresses: &[Dress], appointments: &[Appointment], today: NaiveDate) -> Self {
        let upcoming_appointments = appointments
            .iter()
            .filter(|a| a.date >= today && a.status != AppointmentStatus::Canceled)
            .cloned()
            .collect();

        Self {
            total_dresses: dresses.len(),
            available_dresses: dresses.iter().filter(|d| d.available).count(),
            upcoming_appointments,
            confirmed_appointments: appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Confirmed)
                .count(),
        }
    }
}
