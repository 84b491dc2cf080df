//! # Memirros
//!
//! Data-access layer of a dress-rental shop: a catalog of dresses, fitting
//! appointments, client records and the accounts allowed to log in.
//!
//! The store lives in memory. Each collection is owned by a
//! [`ResourceActor`](actor_framework::ResourceActor) that serves one request
//! at a time, and callers go through typed clients that wait an artificial
//! network delay before every request, so user interfaces built on top can
//! exercise their loading states.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use memirros::app_system::AtelierSystem;
//! use memirros::config::SystemConfig;
//! use memirros::domain::{Category, DressFilter};
//!
//! let system = AtelierSystem::new(SystemConfig::default())?;
//! let brides = system
//!     .dress_client
//!     .list_dresses(DressFilter::category(Category::Bride))
//!     .await?;
//! assert!(brides.iter().all(|d| d.category == Category::Bride));
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod appointment_actor;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod domain;
pub mod dress_actor;
pub mod ids;
pub mod latency;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
