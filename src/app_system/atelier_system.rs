use chrono::NaiveDate;
use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::app_system::{seed, DashboardStats, SystemError};
use crate::clients::{AppointmentClient, AuthClient, CustomerClient, DressClient};
use crate::config::SystemConfig;
use crate::domain::{AppointmentFilter, Appointment, Client, Dress, DressFilter, User};
use crate::ids::TimestampIds;
use crate::latency::Latency;

/// The data store and its access layer.
///
/// Owns one resource actor per collection, seeded with the sample data, and
/// hands out the clients. Each instance is an independent store, so tests
/// build a fresh one instead of sharing state.
pub struct AtelierSystem {
    pub dress_client: DressClient,
    pub appointment_client: AppointmentClient,
    pub customer_client: CustomerClient,
    pub auth_client: AuthClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AtelierSystem {
    /// Seeds and starts every actor. Must be called inside a tokio runtime.
    #[instrument(name = "atelier_system", skip(config))]
    pub fn new(config: SystemConfig) -> Result<Self, SystemError> {
        config.validate()?;
        info!("Starting atelier system");

        let latency = Latency::new(config.latency.clone());
        let ids = TimestampIds::new();
        let mut handles = Vec::new();

        let dress_ids = ids.clone();
        let (dress_actor, dress_inner) =
            ResourceActor::<Dress>::new(config.buffer_size, move || dress_ids.next_id());
        handles.push(tokio::spawn(dress_actor.with_records(seed::dresses()).run()));
        let dress_client = DressClient::new(dress_inner, latency.clone());

        let appointment_ids = ids.clone();
        let (appointment_actor, appointment_inner) =
            ResourceActor::<Appointment>::new(config.buffer_size, move || appointment_ids.next_id());
        handles.push(tokio::spawn(
            appointment_actor.with_records(seed::appointments()).run(),
        ));
        let appointment_client =
            AppointmentClient::new(appointment_inner, dress_client.clone(), latency.clone());

        // Client records and users are never created, so their id source is unused.
        let client_ids = ids.clone();
        let (customer_actor, customer_inner) =
            ResourceActor::<Client>::new(config.buffer_size, move || client_ids.next_id());
        handles.push(tokio::spawn(customer_actor.with_records(seed::clients()).run()));
        let customer_client = CustomerClient::new(customer_inner, latency.clone());

        let (user_actor, user_inner) =
            ResourceActor::<User>::new(config.buffer_size, move || ids.next_id());
        handles.push(tokio::spawn(user_actor.with_records(seed::users()).run()));
        let auth_client = AuthClient::new(user_inner, latency);

        info!("Atelier system started successfully");

        Ok(Self {
            dress_client,
            appointment_client,
            customer_client,
            auth_client,
            handles,
        })
    }

    /// Dashboard numbers as of `today`. Both collections are read
    /// concurrently, so this costs one read latency.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self, today: NaiveDate) -> Result<DashboardStats, SystemError> {
        let (dresses, appointments) = tokio::join!(
            self.dress_client.list_dresses(DressFilter::default()),
            self.appointment_client.list_appointments(AppointmentFilter::default()),
        );
        Ok(DashboardStats::compute(&dresses?, &appointments?, today))
    }

    /// Stops every actor after its queued requests, then waits for the tasks.
    ///
    /// Shutdown errors are logged and the remaining actors are still stopped.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down atelier system");

        // Appointments first, they depend on the catalog.
        let _ = self.appointment_client.shutdown().await;
        let _ = self.dress_client.shutdown().await;
        let _ = self.customer_client.shutdown().await;
        let _ = self.auth_client.shutdown().await;

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor shutdown error");
                failure.get_or_insert_with(|| SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("Atelier system shutdown complete");
        failure.map_or(Ok(()), Err)
    }
}
