//! Access layer: typed handles over the resource actors.
//!
//! Every method waits the simulated latency of its operation class, then
//! sends exactly one request to the owning actor, and converts framework
//! errors into the domain error of its entity.

#[macro_use]
mod macros;

pub mod appointment_client;
pub mod auth_client;
pub mod customer_client;
pub mod dress_client;

pub use appointment_client::*;
pub use auth_client::*;
pub use customer_client::*;
pub use dress_client::*;
