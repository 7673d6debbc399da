//! Domain layer for the content-security engine
//!
//! Contains the entities and value objects of the security ubiquitous
//! language: threat levels, alert taxonomy, audit records, and scan
//! verdicts. This layer has no I/O and no engine logic.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::DomainError;
