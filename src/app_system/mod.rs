//! System orchestration, seeding, startup, and shutdown logic.

pub mod atelier_system;
pub mod dashboard;
pub mod error;
pub mod seed;
pub mod telemetry;

pub use atelier_system::*;
pub use dashboard::*;
pub use error::*;
pub use telemetry::*;
