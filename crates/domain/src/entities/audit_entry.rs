//! Audit log entry entity - Records security-relevant events

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::ThreatLevel;
use crate::errors::DomainError;

/// Type of audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    /// A conversation was opened
    ConversationStart,
    /// A conversation was closed
    ConversationEnd,
    /// A user prompt entered the pipeline
    MessageSent,
    /// A model response left the pipeline
    ResponseReceived,
    /// A scan produced one or more alerts
    ThreatDetected,
    /// A request was blocked by policy
    ThreatBlocked,
    /// Secret content was redacted from text
    SecretRedacted,
    /// An alert was acknowledged by the user
    AlertAcknowledged,
    /// Engine configuration changed
    ConfigChanged,
    /// General system lifecycle event
    System,
}

impl std::fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ConversationStart => "conversation_start",
            Self::ConversationEnd => "conversation_end",
            Self::MessageSent => "message_sent",
            Self::ResponseReceived => "response_received",
            Self::ThreatDetected => "threat_detected",
            Self::ThreatBlocked => "threat_blocked",
            Self::SecretRedacted => "secret_redacted",
            Self::AlertAcknowledged => "alert_acknowledged",
            Self::ConfigChanged => "config_changed",
            Self::System => "system",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AuditEventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conversation_start" => Ok(Self::ConversationStart),
            "conversation_end" => Ok(Self::ConversationEnd),
            "message_sent" => Ok(Self::MessageSent),
            "response_received" => Ok(Self::ResponseReceived),
            "threat_detected" => Ok(Self::ThreatDetected),
            "threat_blocked" => Ok(Self::ThreatBlocked),
            "secret_redacted" => Ok(Self::SecretRedacted),
            "alert_acknowledged" => Ok(Self::AlertAcknowledged),
            "config_changed" => Ok(Self::ConfigChanged),
            "system" => Ok(Self::System),
            other => Err(DomainError::InvalidAuditEventType(other.to_string())),
        }
    }
}

/// Immutable record of a security-relevant event
///
/// Created only by the engine; never mutated after creation. Retained in
/// the audit log until capacity eviction or an explicit clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry identity
    pub id: Uuid,
    /// Type of event
    pub event_type: AuditEventType,
    /// Human-readable description
    pub description: String,
    /// Conversation the event belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<Uuid>,
    /// Message the event belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Uuid>,
    /// User the event belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Severity associated with the event
    pub severity: ThreatLevel,
    /// Additional key/value context
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Create a new audit entry with severity `Normal`
    pub fn new(event_type: AuditEventType, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            description: description.into(),
            conversation_id: None,
            message_id: None,
            user_id: None,
            severity: ThreatLevel::Normal,
            metadata: BTreeMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Set the severity
    #[must_use]
    pub const fn with_severity(mut self, severity: ThreatLevel) -> Self {
        self.severity = severity;
        self
    }

    /// Attach the conversation this event belongs to
    #[must_use]
    pub const fn with_conversation(mut self, conversation_id: Uuid) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Attach the message this event belongs to
    #[must_use]
    pub const fn with_message(mut self, message_id: Uuid) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Attach the user this event belongs to
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Add a metadata key/value pair
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
