use crate::actor_framework::Entity;
use crate::domain::{Appointment, AppointmentCreate, AppointmentFilter, AppointmentStatus};
use super::actions::{AppointmentAction, AppointmentActionResult};

impl Entity for Appointment {
    type Id = String;
    type CreatePayload = AppointmentCreate;
    // Only the status changes after booking, through actions.
    type Patch = ();
    type Filter = AppointmentFilter;
    type Action = AppointmentAction;
    type ActionResult = AppointmentActionResult;

    const KIND: &'static str = "Appointment";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Appointment from a booking payload.
    ///
    /// # Notes
    /// The status always starts as pending, whatever the payload says.
    fn from_create(id: String, params: AppointmentCreate) -> Result<Self, String> {
        params.validate()?;
        Ok(Self {
            id,
            client_name: params.client_name,
            client_id: params.client_id,
            phone: params.phone,
            email: params.email,
            date: params.date,
            time: params.time,
            dress_id: params.dress_id,
            dress_name: params.dress_name,
            status: AppointmentStatus::Pending,
            notes: params.notes,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn matches(&self, filter: &AppointmentFilter) -> bool {
        filter.matches(self)
    }

    fn handle_action(&mut self, action: AppointmentAction) -> Result<AppointmentActionResult, String> {
        match action {
            AppointmentAction::UpdateStatus(status) => {
                self.status = status;
                Ok(AppointmentActionResult::UpdateStatus(self.clone()))
            }
            AppointmentAction::Cancel => {
                let previous = self.status;
                self.status = AppointmentStatus::Canceled;
                Ok(AppointmentActionResult::Cancel(previous))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn booking(status: Option<AppointmentStatus>) -> AppointmentCreate {
        AppointmentCreate {
            client_name: "Júlia Santos".to_string(),
            client_id: Some("c3".to_string()),
            phone: "11 97777-6666".to_string(),
            email: Some("julia@email.com".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            dress_id: "2".to_string(),
            dress_name: Some("Vestido Noiva Minimalista".to_string()),
            status,
            notes: None,
        }
    }

    #[test]
    fn test_status_forced_to_pending() {
        for status in AppointmentStatus::ALL {
            let created = Appointment::from_create("x".to_string(), booking(Some(status))).unwrap();
            assert_eq!(created.status, AppointmentStatus::Pending);
        }
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let mut appointment = Appointment::from_create("x".to_string(), booking(None)).unwrap();
        let before = appointment.clone();

        let result = appointment
            .handle_action(AppointmentAction::UpdateStatus(AppointmentStatus::Confirmed))
            .unwrap();
        let AppointmentActionResult::UpdateStatus(updated) = result else {
            panic!("unexpected result: {result:?}");
        };

        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(Appointment { status: before.status, ..updated }, before);
    }

    #[test]
    fn test_cancel_reports_previous_status() {
        let mut appointment = Appointment::from_create("x".to_string(), booking(None)).unwrap();
        let result = appointment.handle_action(AppointmentAction::Cancel).unwrap();

        assert!(matches!(result, AppointmentActionResult::Cancel(AppointmentStatus::Pending)));
        assert_eq!(appointment.status, AppointmentStatus::Canceled);
    }
}
