use chrono::{Duration, Local, NaiveTime};
use tracing::{error, info, warn, Instrument};

use memirros::app_system::{setup_tracing, AtelierSystem};
use memirros::clients::SHARED_PASSWORD;
use memirros::config::SystemConfig;
use memirros::domain::{AppointmentCreate, AppointmentStatus, DressFilter, ALL_CATEGORIES_LABEL};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(latency = ?config.latency, "Starting Memirros demo");

    // Create the entire store (seeds and starts every actor)
    let system = AtelierSystem::new(config).map_err(|e| e.to_string())?;

    // Browse the catalog the way the storefront does
    let span = tracing::info_span!("catalog");
    let dress = async {
        let filter = DressFilter::from_labels(ALL_CATEGORIES_LABEL, "renda").map_err(|e| e.to_string())?;
        let dresses = system
            .dress_client
            .list_dresses(filter)
            .await
            .map_err(|e| e.to_string())?;
        info!(count = dresses.len(), "Dresses matching \"renda\"");
        dresses
            .into_iter()
            .find(|d| d.available)
            .ok_or_else(|| "no available dress in the catalog".to_string())
    }
    .instrument(span)
    .await?;

    info!(dress_id = %dress.id, dress_name = %dress.name, "Dress chosen");

    // Log in as the demo client and book a fitting
    let span = tracing::info_span!("booking");
    let appointment = async {
        let user = system
            .auth_client
            .login("cliente@memirros.com", SHARED_PASSWORD)
            .await
            .map_err(|e| e.to_string())?;
        info!(user = %user.name, "Client logged in");

        let booking = AppointmentCreate {
            client_name: user.name.clone(),
            client_id: Some(user.id.clone()),
            phone: "11 99999-0000".to_string(),
            email: Some(user.email.clone()),
            date: Local::now().date_naive() + Duration::days(7),
            time: NaiveTime::from_hms_opt(15, 30, 0).ok_or("invalid time")?,
            dress_id: dress.id.clone(),
            dress_name: None,
            status: None,
            notes: Some("Agendado pela demo".to_string()),
        };
        system
            .appointment_client
            .create_appointment(booking)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(appointment_id = %appointment.id, status = %appointment.status, "Fitting booked");

    // The back office confirms it
    let span = tracing::info_span!("back_office");
    let confirmed = async {
        let admin = system
            .auth_client
            .login("admin@memirros.com", SHARED_PASSWORD)
            .await
            .map_err(|e| e.to_string())?;
        if !admin.is_admin() {
            return Err(format!("{} is not an admin", admin.email));
        }
        system
            .appointment_client
            .update_appointment_status(&appointment.id, AppointmentStatus::Confirmed)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    match confirmed {
        Ok(appointment) => info!(status = %appointment.status, "Appointment confirmed"),
        Err(e) => {
            error!(error = %e, "Confirmation failed")
        }
    }

    match system.dashboard_stats(Local::now().date_naive()).await {
        Ok(stats) => info!(
            total_dresses = stats.total_dresses,
            available_dresses = stats.available_dresses,
            upcoming = stats.upcoming_appointments.len(),
            confirmed = stats.confirmed_appointments,
            "Dashboard"
        ),
        Err(e) => warn!(error = %e, "Dashboard unavailable"),
    }

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
