//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A threat level name could not be parsed
    #[error("Invalid threat level: {0}")]
    InvalidThreatLevel(String),

    /// An alert type name could not be parsed
    #[error("Invalid alert type: {0}")]
    InvalidAlertType(String),

    /// An audit event type name could not be parsed
    #[error("Invalid audit event type: {0}")]
    InvalidAuditEventType(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
