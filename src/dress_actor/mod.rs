//! Catalog storage: dress records and their validation rules.

pub mod entity;
pub mod error;

pub use error::*;
