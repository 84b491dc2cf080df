use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{non_blank, ParseLabelError};

/// Label the admin list uses for "every status".
pub const ALL_STATUSES_LABEL: &str = "todos";

/// Lifecycle of a fitting appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "cancelado")]
    Canceled,
    #[serde(rename = "concluido")]
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Canceled,
        AppointmentStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pendente",
            AppointmentStatus::Confirmed => "confirmado",
            AppointmentStatus::Canceled => "cancelado",
            AppointmentStatus::Completed => "concluido",
        }
    }

    /// Transitions the admin screens offer from this status.
    ///
    /// Advisory only: the store accepts any status change.
    pub fn next_steps(&self) -> &'static [AppointmentStatus] {
        match self {
            AppointmentStatus::Pending => {
                &[AppointmentStatus::Confirmed, AppointmentStatus::Canceled]
            }
            AppointmentStatus::Confirmed => {
                &[AppointmentStatus::Canceled, AppointmentStatus::Completed]
            }
            AppointmentStatus::Canceled | AppointmentStatus::Completed => &[],
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ParseLabelError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .ok_or_else(|| ParseLabelError {
                kind: "status",
                label: label.to_string(),
            })
    }
}

/// `HH:MM` wire format for appointment times.
mod hour_minute {
    use chrono::NaiveTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

/// A scheduled fitting session linking a client to a dress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(rename = "cliente")]
    pub client_name: String,
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "horario", with = "hour_minute")]
    pub time: NaiveTime,
    #[serde(rename = "vestidoId")]
    pub dress_id: String,
    /// Dress name at booking time.
    #[serde(rename = "vestidoNome", default, skip_serializing_if = "Option::is_none")]
    pub dress_name: Option<String>,
    pub status: AppointmentStatus,
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload of a booking request.
///
/// `status` and `dress_name` are accepted for shape compatibility with the
/// booking form, but the store overrides both: every new appointment starts
/// pending and the dress name is snapshotted from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCreate {
    #[serde(rename = "cliente")]
    pub client_name: String,
    #[serde(rename = "clienteId", default)]
    pub client_id: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "horario", with = "hour_minute")]
    pub time: NaiveTime,
    #[serde(rename = "vestidoId")]
    pub dress_id: String,
    #[serde(rename = "vestidoNome", default)]
    pub dress_name: Option<String>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
}

impl AppointmentCreate {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if non_blank(&self.client_name).is_none() {
            return Err("Client name is required".to_string());
        }
        if non_blank(&self.phone).is_none() {
            return Err("Phone is required".to_string());
        }
        Ok(())
    }
}

/// Filter for appointment listings. Every present condition must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub date: Option<NaiveDate>,
    pub client_id: Option<String>,
}

impl AppointmentFilter {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Self::default()
        }
    }

    /// Builds a filter from the admin list's status selector label, where
    /// [`ALL_STATUSES_LABEL`] means no status restriction.
    pub fn from_labels(status: &str, date: Option<NaiveDate>) -> Result<Self, ParseLabelError> {
        let status = match status {
            ALL_STATUSES_LABEL | "" => None,
            label => Some(label.parse()?),
        };
        Ok(Self {
            status,
            date,
            client_id: None,
        })
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.status.map_or(true, |status| appointment.status == status)
            && self.date.map_or(true, |date| appointment.date == date)
            && self
                .client_id
                .as_deref()
                .map_or(true, |id| appointment.client_id.as_deref() == Some(id))
    }
}

/// Newest date first. Stable, so same-day entries keep store order.
pub fn sort_by_date_desc(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Day agenda order: earliest time first.
pub fn sort_by_time(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| a.time.cmp(&b.time));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, date: (i32, u32, u32), hour: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            client_name: "Maria".to_string(),
            client_id: Some("c1".to_string()),
            phone: "11 99999-0000".to_string(),
            email: None,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            dress_id: "1".to_string(),
            dress_name: None,
            status: AppointmentStatus::Pending,
            notes: None,
        }
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(appointment("a1", (2025, 2, 15), 14)).unwrap();
        assert_eq!(json["data"], "2025-02-15");
        assert_eq!(json["horario"], "14:00");
        assert_eq!(json["status"], "pendente");
        assert_eq!(json["clienteId"], "c1");
        assert!(json.get("email").is_none());
        assert!(json.get("vestidoNome").is_none());
    }

    #[test]
    fn test_booking_payload_from_form_json() {
        let payload: AppointmentCreate = serde_json::from_str(
            r#"{
                "cliente": "Ana Costa",
                "telefone": "11 98888-7777",
                "data": "2025-03-01",
                "horario": "09:30",
                "vestidoId": "3",
                "status": "confirmado"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(payload.status, Some(AppointmentStatus::Confirmed));
        assert!(payload.validate().is_ok());

        let bad_time = serde_json::from_str::<AppointmentCreate>(
            r#"{"cliente": "Ana", "telefone": "1", "data": "2025-03-01", "horario": "nine", "vestidoId": "3"}"#,
        );
        assert!(bad_time.is_err());
    }

    #[test]
    fn test_blank_required_fields_are_rejected() {
        let mut payload = AppointmentCreate {
            client_name: "  ".to_string(),
            client_id: None,
            phone: "11 90000-0000".to_string(),
            email: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            dress_id: "1".to_string(),
            dress_name: None,
            status: None,
            notes: None,
        };
        assert!(payload.validate().is_err());

        payload.client_name = "Ana".to_string();
        payload.phone = String::new();
        assert!(payload.validate().is_err());

        // The dress reference is not checked; an unknown dress books without a name.
        payload.phone = "11 90000-0000".to_string();
        payload.dress_id = String::new();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_sort_by_date_desc_is_stable() {
        let mut list = vec![
            appointment("a1", (2025, 2, 15), 14),
            appointment("a2", (2025, 2, 20), 10),
            appointment("a3", (2025, 2, 18), 16),
            appointment("a4", (2025, 2, 20), 8),
        ];
        sort_by_date_desc(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a4", "a3", "a1"]);

        sort_by_time(&mut list);
        assert_eq!(list[0].id, "a4");
    }

    #[test]
    fn test_filter_conditions() {
        let mut confirmed = appointment("a1", (2025, 2, 15), 14);
        confirmed.status = AppointmentStatus::Confirmed;
        let day = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();

        assert!(AppointmentFilter::status(AppointmentStatus::Confirmed).matches(&confirmed));
        assert!(!AppointmentFilter::status(AppointmentStatus::Pending).matches(&confirmed));
        assert!(AppointmentFilter::date(day).matches(&confirmed));
        assert!(AppointmentFilter::client("c1").matches(&confirmed));
        assert!(!AppointmentFilter::client("c2").matches(&confirmed));

        let all = AppointmentFilter::from_labels(ALL_STATUSES_LABEL, None).unwrap();
        assert_eq!(all, AppointmentFilter::default());
        assert!(AppointmentFilter::from_labels("atrasado", None).is_err());
    }

    #[test]
    fn test_next_steps() {
        assert_eq!(
            AppointmentStatus::Pending.next_steps(),
            &[AppointmentStatus::Confirmed, AppointmentStatus::Canceled]
        );
        assert!(AppointmentStatus::Completed.next_steps().is_empty());
    }
}
