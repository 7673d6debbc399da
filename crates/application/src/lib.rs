//! Application layer - The content-security engine
//!
//! Contains the scanning services (secret redaction, threat classification),
//! the blocking policy, the alert and audit stores, and the owning
//! `SecurityMonitor` facade that serializes state mutation.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
