//! Infrastructure layer - Configuration loading for the engine
//!
//! Deserializes the layered configuration (file plus environment
//! overrides) and converts it into the runtime [`application`] types.

pub mod config;
pub mod error;

pub use config::{AppConfig, ContentSecurityConfig};
pub use error::InfrastructureError;
