use chrono::NaiveDate;
use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::appointment_actor::{AppointmentAction, AppointmentActionResult, AppointmentError};
use crate::clients::DressClient;
use crate::domain::{
    sort_by_date_desc, sort_by_time, Appointment, AppointmentCreate, AppointmentFilter,
    AppointmentStatus,
};
use crate::latency::{Latency, Operation};

/// Client for fitting appointments.
///
/// Booking needs the catalog to snapshot the dress name, so this client
/// also holds a [`DressClient`].
#[derive(Clone)]
pub struct AppointmentClient {
    inner: ResourceClient<Appointment>,
    dress_client: DressClient,
    latency: Latency,
}

impl_client_lookup!(AppointmentClient, Appointment, AppointmentError, appointment);

impl AppointmentClient {
    pub fn new(
        inner: ResourceClient<Appointment>,
        dress_client: DressClient,
        latency: Latency,
    ) -> Self {
        Self {
            inner,
            dress_client,
            latency,
        }
    }

    /// Lists appointments matching `filter`, newest date first.
    #[instrument(skip(self))]
    pub async fn list_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        self.latency.simulate(Operation::Read).await;
        debug!("Sending request");
        let mut appointments = self.inner.list(filter).await?;
        sort_by_date_desc(&mut appointments);
        Ok(appointments)
    }

    /// A client's appointments, in booking order.
    #[instrument(skip(self))]
    pub async fn list_appointments_by_client(
        &self,
        client_id: &str,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        self.latency.simulate(Operation::Read).await;
        debug!("Sending request");
        Ok(self.inner.list(AppointmentFilter::client(client_id)).await?)
    }

    /// Agenda of a single day, earliest time first.
    #[instrument(skip(self))]
    pub async fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>, AppointmentError> {
        self.latency.simulate(Operation::Read).await;
        debug!("Sending request");
        let mut appointments = self.inner.list(AppointmentFilter::date(date)).await?;
        sort_by_time(&mut appointments);
        Ok(appointments)
    }

    /// Books a fitting.
    ///
    /// The dress name is snapshotted from the catalog (left empty when the
    /// dress does not exist) and the status always starts as pending.
    #[instrument(
        skip(self, booking),
        fields(dress_id = %booking.dress_id, date = %booking.date, time = %booking.time)
    )]
    pub async fn create_appointment(
        &self,
        mut booking: AppointmentCreate,
    ) -> Result<Appointment, AppointmentError> {
        self.latency.simulate(Operation::Write).await;
        info!("Processing create_appointment request");

        // Step 1: Snapshot the dress name
        booking.dress_name = match self.dress_client.lookup_dress(&booking.dress_id).await {
            Ok(Some(dress)) => {
                debug!(dress_name = %dress.name, "Dress found");
                Some(dress.name)
            }
            Ok(None) => {
                debug!("Dress not in catalog, booking without a name snapshot");
                None
            }
            Err(e) => {
                error!(error = %e, "Dress lookup failed");
                return Err(e.into());
            }
        };

        // Step 2: Store the appointment
        let created = self.inner.create(booking).await?;
        info!(appointment_id = %created.id, "Appointment booked");
        Ok(created)
    }

    /// Overwrites the status of an appointment. Any status may follow any
    /// other.
    ///
    /// # Errors
    /// [`AppointmentError::NotFound`] when no appointment has this id.
    #[instrument(skip(self))]
    pub async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        self.latency.simulate(Operation::StatusChange).await;
        debug!("Sending request");
        match self
            .inner
            .perform_action(id.to_string(), AppointmentAction::UpdateStatus(status))
            .await?
        {
            AppointmentActionResult::UpdateStatus(appointment) => {
                info!("Appointment status updated");
                Ok(appointment)
            }
            other => Err(AppointmentError::ActorCommunicationError(format!(
                "Unexpected result: {other:?}"
            ))),
        }
    }

    /// Cancels an appointment. Canceling an unknown id succeeds without
    /// touching the store.
    #[instrument(skip(self))]
    pub async fn cancel_appointment(&self, id: &str) -> Result<(), AppointmentError> {
        self.latency.simulate(Operation::StatusChange).await;
        debug!("Sending request");
        match self
            .inner
            .perform_action(id.to_string(), AppointmentAction::Cancel)
            .await
            .map_err(AppointmentError::from)
        {
            Ok(AppointmentActionResult::Cancel(previous)) => {
                info!(%previous, "Appointment canceled");
                Ok(())
            }
            Ok(other) => Err(AppointmentError::ActorCommunicationError(format!(
                "Unexpected result: {other:?}"
            ))),
            Err(AppointmentError::NotFound(_)) => {
                debug!("Appointment not found, nothing to cancel");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Stops the backing actor once queued requests are served.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), AppointmentError> {
        debug!("Sending shutdown request");
        Ok(self.inner.shutdown().await?)
    }
}
