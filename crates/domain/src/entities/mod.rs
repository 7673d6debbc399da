//! Domain entities - Objects with identity and lifecycle

mod audit_entry;
mod security_alert;
mod threat_analysis;

pub use audit_entry::{AuditEntry, AuditEventType};
pub use security_alert::{AlertSource, AlertType, SecurityAlert, ThreatLevel};
pub use threat_analysis::{RedactionResult, ThreatAnalysis};
