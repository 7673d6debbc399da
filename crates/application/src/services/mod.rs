//! Engine services - Scanning, policy, and bounded state

mod alert_store;
mod audit_log;
mod policy;
mod secret_redactor;
mod security_monitor;
mod threat_classifier;

pub use alert_store::AlertStore;
pub use audit_log::AuditLog;
pub use policy::{PolicyDecision, PolicyEngine};
pub use secret_redactor::SecretRedactor;
pub use security_monitor::{MonitorConfig, SecurityMonitor};
pub use threat_classifier::{ConfidenceModel, ThreatClassifier};
