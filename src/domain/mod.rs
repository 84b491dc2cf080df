//! Business entities of the rental shop.
//!
//! Pure data structures with no actor concerns. Serialized field names and
//! enum labels follow the storefront's data contract (`nome`, `categoria`,
//! `pendente`, ...), while the Rust names are English.

pub mod appointment;
pub mod client;
pub mod dress;
pub mod user;

pub use appointment::*;
pub use client::*;
pub use dress::*;
pub use user::*;

use thiserror::Error;

/// A label that does not name any variant of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

/// Returns the trimmed text when it is not blank.
pub(crate) fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
