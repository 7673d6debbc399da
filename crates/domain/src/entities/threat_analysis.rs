//! Scan verdict value objects
//!
//! `ThreatAnalysis` aggregates classifier output and redaction into a single
//! immutable verdict; `RedactionResult` is the output of a secret scan. Both
//! are transient values owned by the caller.

use serde::{Deserialize, Serialize};

use crate::entities::{SecurityAlert, ThreatLevel};

/// Confidence ceiling for a flagged analysis; `1.0` is reserved for clean.
const FLAGGED_CONFIDENCE_CEILING: f32 = 0.99;

/// Immutable result of scanning one piece of text
///
/// Invariants, enforced by the constructors:
/// - `is_clean == alerts.is_empty() == (threat_level == Normal)`
/// - `confidence == 1.0` iff `alerts.is_empty()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatAnalysis {
    /// Whether no rule matched
    pub is_clean: bool,
    /// Maximum severity across all detections
    pub threat_level: ThreatLevel,
    /// All detections, in detection order
    pub alerts: Vec<SecurityAlert>,
    /// Certainty that flagged content is truly malicious (0.0 - 1.0)
    pub confidence: f32,
    /// Sanitized copy of the input, when redaction was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_content: Option<String>,
    /// Human-readable mitigations, one or more per alert type present
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl ThreatAnalysis {
    /// Create a clean verdict: no alerts, normal level, full confidence
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            is_clean: true,
            threat_level: ThreatLevel::Normal,
            alerts: Vec::new(),
            confidence: 1.0,
            sanitized_content: None,
            recommendations: Vec::new(),
        }
    }

    /// Create a flagged verdict from detections
    ///
    /// The threat level is the maximum severity among the alerts. An empty
    /// alert list degrades to [`Self::clean`], and a flagged confidence is
    /// clamped below `1.0` so that full confidence remains unambiguous.
    #[must_use]
    pub fn flagged(alerts: Vec<SecurityAlert>, confidence: f32) -> Self {
        if alerts.is_empty() {
            return Self::clean();
        }

        let threat_level = alerts
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or(ThreatLevel::Normal);

        Self {
            is_clean: false,
            threat_level,
            alerts,
            confidence: confidence.clamp(f32::EPSILON, FLAGGED_CONFIDENCE_CEILING),
            sanitized_content: None,
            recommendations: Vec::new(),
        }
    }

    /// Attach a sanitized copy of the input
    #[must_use]
    pub fn with_sanitized_content(mut self, content: impl Into<String>) -> Self {
        self.sanitized_content = Some(content.into());
        self
    }

    /// Attach mitigation recommendations
    #[must_use]
    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations
            .extend(recommendations.into_iter().map(Into::into));
        self
    }

    /// Returns the highest severity among detections, if any
    #[must_use]
    pub fn highest_severity(&self) -> Option<ThreatLevel> {
        self.alerts.iter().map(|a| a.severity).max()
    }
}

impl Default for ThreatAnalysis {
    fn default() -> Self {
        Self::clean()
    }
}

/// Result of scanning text for secrets
///
/// Invariant: `detected == false` iff `sanitized` is byte-identical to the
/// original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionResult {
    /// Whether any secret matched
    pub detected: bool,
    /// Copy of the input with matches replaced by labeled markers
    pub sanitized: String,
}

impl RedactionResult {
    /// Result for text containing no secrets; keeps the input unchanged
    #[must_use]
    pub fn clean(original: impl Into<String>) -> Self {
        Self {
            detected: false,
            sanitized: original.into(),
        }
    }

    /// Result for text where at least one secret was replaced
    #[must_use]
    pub fn redacted(sanitized: impl Into<String>) -> Self {
        Self {
            detected: true,
            sanitized: sanitized.into(),
        }
    }
}
