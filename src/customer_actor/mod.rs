//! Client (customer) records kept by the back office.

pub mod entity;
pub mod error;

pub use error::*;
