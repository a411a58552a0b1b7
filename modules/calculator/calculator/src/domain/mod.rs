//! Domain layer for the calculator service
//!
//! Pure arithmetic dispatch; no state survives a call.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::{calculate, calculate_wire};
