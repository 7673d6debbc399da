//! Infrastructure-level errors

use application::ApplicationError;
use thiserror::Error;

/// Errors that can occur in the infrastructure layer
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Loaded configuration was rejected by the engine
    #[error(transparent)]
    Application(#[from] ApplicationError),
}
