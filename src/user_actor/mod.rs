//! Login accounts.

pub mod entity;
pub mod error;

pub use error::*;
