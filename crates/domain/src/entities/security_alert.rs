//! Security alert entities for the content-security engine
//!
//! This module provides the ordered threat severity scale, the closed alert
//! taxonomy, and the alert entity recorded for every detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Severity level of a detected security threat
///
/// Totally ordered: `Normal < Elevated < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    /// No threat detected
    Normal,
    /// Suspicious but low-impact finding
    Elevated,
    /// Clear attack pattern detected
    High,
    /// Severe finding warranting immediate action
    Critical,
}

impl ThreatLevel {
    /// Returns the numeric rank for this level (0-3)
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Elevated => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ThreatLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "elevated" => Ok(Self::Elevated),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(DomainError::InvalidThreatLevel(other.to_string())),
        }
    }
}

/// Category of a detected security threat
///
/// Closed taxonomy of eleven categories. Each carries a display icon
/// identifier and at least one mitigation string used to build scan
/// recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Attempt to make the model disregard its governing instructions
    PromptInjection,
    /// Instructions causing data to be sent to an external destination
    DataExfiltration,
    /// Destructive command fragments or harmful code
    MaliciousCode,
    /// Attempt to remove behavioral restrictions
    JailbreakAttempt,
    /// Credential-shaped content detected in the text
    CredentialLeak,
    /// URL pointing at a private or internal network range
    SuspiciousUrl,
    /// Urgency language combined with a request for credentials
    SocialEngineering,
    /// Long encoded blob paired with execution intent
    EncodedPayload,
    /// Attempt to gain elevated system permissions
    PrivilegeEscalation,
    /// Luring the user toward a credential-harvesting action
    Phishing,
    /// Access to sensitive system or credential files
    UnsafeFileAccess,
}

impl AlertType {
    /// Returns all alert types for iteration
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PromptInjection,
            Self::DataExfiltration,
            Self::MaliciousCode,
            Self::JailbreakAttempt,
            Self::CredentialLeak,
            Self::SuspiciousUrl,
            Self::SocialEngineering,
            Self::EncodedPayload,
            Self::PrivilegeEscalation,
            Self::Phishing,
            Self::UnsafeFileAccess,
        ]
    }

    /// Returns the display icon identifier for this alert type
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::PromptInjection => "text.badge.xmark",
            Self::DataExfiltration => "arrow.up.doc",
            Self::MaliciousCode => "chevron.left.forwardslash.chevron.right",
            Self::JailbreakAttempt => "lock.open",
            Self::CredentialLeak => "key.horizontal",
            Self::SuspiciousUrl => "network.badge.shield.half.filled",
            Self::SocialEngineering => "person.crop.circle.badge.exclamationmark",
            Self::EncodedPayload => "doc.zipper",
            Self::PrivilegeEscalation => "lock.open.trianglebadge.exclamationmark",
            Self::Phishing => "envelope.badge.shield.half.filled",
            Self::UnsafeFileAccess => "folder.badge.questionmark",
        }
    }

    /// Returns a human-readable mitigation recommendation
    #[must_use]
    pub const fn mitigation(&self) -> &'static str {
        match self {
            Self::PromptInjection => {
                "Review the message for instruction-override phrasing before continuing"
            }
            Self::DataExfiltration => {
                "Do not forward content to external URLs without verifying the destination"
            }
            Self::MaliciousCode => "Do not execute the quoted commands; verify intent with the user",
            Self::JailbreakAttempt => {
                "Reject requests to disable safety restrictions or adopt unrestricted personas"
            }
            Self::CredentialLeak => "Rotate the exposed credential and use the sanitized text",
            Self::SuspiciousUrl => "Verify internal-network URLs before opening or sharing them",
            Self::SocialEngineering => {
                "Treat urgent credential requests as hostile until independently confirmed"
            }
            Self::EncodedPayload => "Decode and inspect encoded content before acting on it",
            Self::PrivilegeEscalation => {
                "Deny privilege-elevation requests that lack an authorized change ticket"
            }
            Self::Phishing => "Do not follow verification links; navigate to the service directly",
            Self::UnsafeFileAccess => {
                "Block reads of credential files and system password databases"
            }
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PromptInjection => "prompt_injection",
            Self::DataExfiltration => "data_exfiltration",
            Self::MaliciousCode => "malicious_code",
            Self::JailbreakAttempt => "jailbreak_attempt",
            Self::CredentialLeak => "credential_leak",
            Self::SuspiciousUrl => "suspicious_url",
            Self::SocialEngineering => "social_engineering",
            Self::EncodedPayload => "encoded_payload",
            Self::PrivilegeEscalation => "privilege_escalation",
            Self::Phishing => "phishing",
            Self::UnsafeFileAccess => "unsafe_file_access",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AlertType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prompt_injection" => Ok(Self::PromptInjection),
            "data_exfiltration" => Ok(Self::DataExfiltration),
            "malicious_code" => Ok(Self::MaliciousCode),
            "jailbreak_attempt" => Ok(Self::JailbreakAttempt),
            "credential_leak" => Ok(Self::CredentialLeak),
            "suspicious_url" => Ok(Self::SuspiciousUrl),
            "social_engineering" => Ok(Self::SocialEngineering),
            "encoded_payload" => Ok(Self::EncodedPayload),
            "privilege_escalation" => Ok(Self::PrivilegeEscalation),
            "phishing" => Ok(Self::Phishing),
            "unsafe_file_access" => Ok(Self::UnsafeFileAccess),
            other => Err(DomainError::InvalidAlertType(other.to_string())),
        }
    }
}

/// Which side of the chat pipeline produced the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSource {
    /// Text entered by the user, scanned before reaching the model
    UserPrompt,
    /// Text produced by the model, scanned before reaching the user
    ModelResponse,
}

impl std::fmt::Display for AlertSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::UserPrompt => "user_prompt",
            Self::ModelResponse => "model_response",
        };
        write!(f, "{s}")
    }
}

/// A recorded security detection
///
/// Identity is the `id`; two alerts are never merged even when their
/// content is identical - each detection produces a new instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAlert {
    /// Unique alert identity
    pub id: Uuid,
    /// Category of the detection
    pub alert_type: AlertType,
    /// Severity of the detection
    pub severity: ThreatLevel,
    /// Human-readable description
    pub message: String,
    /// When the detection occurred
    pub timestamp: DateTime<Utc>,
    /// Which direction of the pipeline the text came from
    pub source: AlertSource,
    /// Patterns that matched, in detection order
    #[serde(default)]
    pub matched_patterns: Vec<String>,
    /// Excerpt of the offending content
    #[serde(default)]
    pub affected_content: String,
    /// Whether the user has acknowledged this alert
    #[serde(default)]
    pub is_acknowledged: bool,
    /// Whether a mitigation (e.g. redaction) was applied
    #[serde(default)]
    pub mitigation_applied: bool,
}

impl SecurityAlert {
    /// Create a new alert with a fresh identity
    #[must_use]
    pub fn new(
        alert_type: AlertType,
        severity: ThreatLevel,
        message: impl Into<String>,
        source: AlertSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            alert_type,
            severity,
            message: message.into(),
            timestamp: Utc::now(),
            source,
            matched_patterns: Vec::new(),
            affected_content: String::new(),
            is_acknowledged: false,
            mitigation_applied: false,
        }
    }

    /// Record a matched pattern
    #[must_use]
    pub fn with_matched_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.matched_patterns.push(pattern.into());
        self
    }

    /// Record the full list of matched patterns
    #[must_use]
    pub fn with_matched_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matched_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Attach an excerpt of the offending content
    #[must_use]
    pub fn with_affected_content(mut self, content: impl Into<String>) -> Self {
        self.affected_content = content.into();
        self
    }

    /// Mark that a mitigation was applied for this detection
    #[must_use]
    pub const fn with_mitigation_applied(mut self) -> Self {
        self.mitigation_applied = true;
        self
    }

    /// Mark the alert as acknowledged by the user
    pub const fn acknowledge(&mut self) {
        self.is_acknowledged = true;
    }
}
