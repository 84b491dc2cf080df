use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One past rental of a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    #[serde(rename = "vestidoId")]
    pub dress_id: String,
    #[serde(rename = "vestidoNome")]
    pub dress_name: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "valor")]
    pub amount: f64,
}

/// A customer record with contact info and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "historicoAlugueis")]
    pub rental_history: Vec<RentalRecord>,
    /// Ids of the client's fitting appointments.
    #[serde(rename = "historicoProvas")]
    pub appointment_ids: Vec<String>,
}

/// Field-by-field update of a client. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientPatch {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "historicoAlugueis", default)]
    pub rental_history: Option<Vec<RentalRecord>>,
    #[serde(rename = "historicoProvas", default)]
    pub appointment_ids: Option<Vec<String>>,
}

impl ClientPatch {
    pub(crate) fn apply(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(phone) = self.phone {
            client.phone = phone;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(rental_history) = self.rental_history {
            client.rental_history = rental_history;
        }
        if let Some(appointment_ids) = self.appointment_ids {
            client.appointment_ids = appointment_ids;
        }
    }
}
