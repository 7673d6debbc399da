//! Blocking and confirmation policy
//!
//! Pure decision logic over a scan verdict and the monitor configuration.
//! Blocking is reserved for critical findings; user confirmation is asked
//! for high findings and for critical findings the classifier is not
//! confident about.

use domain::{ThreatAnalysis, ThreatLevel};
use serde::{Deserialize, Serialize};

use crate::services::security_monitor::MonitorConfig;

/// Below this confidence a critical finding is confirmed instead of
/// silently blocked
pub const CONFIRMATION_CONFIDENCE_THRESHOLD: f32 = 0.8;

/// What the pipeline should do with scanned content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDecision {
    /// Deliver the content unchanged
    Allow,
    /// Ask the user before delivering
    RequireConfirmation,
    /// Do not deliver the content
    Block,
}

impl std::fmt::Display for PolicyDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Allow => "allow",
            Self::RequireConfirmation => "require_confirmation",
            Self::Block => "block",
        };
        write!(f, "{s}")
    }
}

/// Stateless policy over scan verdicts
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine;

impl PolicyEngine {
    /// Create a new policy engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whether a threat of this level must be blocked
    #[must_use]
    pub fn requires_blocking(&self, level: ThreatLevel) -> bool {
        level == ThreatLevel::Critical
    }

    /// Whether a threat warrants asking the user before proceeding
    ///
    /// True for every high finding, and for critical findings below the
    /// confidence threshold.
    #[must_use]
    pub fn requires_user_confirmation(&self, level: ThreatLevel, confidence: f32) -> bool {
        match level {
            ThreatLevel::High => true,
            ThreatLevel::Critical => confidence < CONFIRMATION_CONFIDENCE_THRESHOLD,
            ThreatLevel::Normal | ThreatLevel::Elevated => false,
        }
    }

    /// Resolve a verdict against the active configuration
    ///
    /// Resolution order:
    /// 1. clean verdicts are always allowed
    /// 2. `log_threats_only` downgrades every enforcement to allow
    /// 3. confirmation-worthy findings ask the user when `prompt_on_high`
    ///    is set; a suppressed critical confirmation falls back to blocking
    /// 4. critical findings block when `auto_block_critical` is set
    #[must_use]
    pub fn decide(&self, analysis: &ThreatAnalysis, config: &MonitorConfig) -> PolicyDecision {
        if analysis.is_clean {
            return PolicyDecision::Allow;
        }
        if config.log_threats_only {
            return PolicyDecision::Allow;
        }

        if self.requires_user_confirmation(analysis.threat_level, analysis.confidence) {
            if config.prompt_on_high {
                return PolicyDecision::RequireConfirmation;
            }
            if self.requires_blocking(analysis.threat_level) && config.auto_block_critical {
                return PolicyDecision::Block;
            }
            return PolicyDecision::Allow;
        }

        if self.requires_blocking(analysis.threat_level) && config.auto_block_critical {
            return PolicyDecision::Block;
        }

        PolicyDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use domain::{AlertSource, AlertType, SecurityAlert};

    use super::*;

    fn analysis(level: ThreatLevel, confidence: f32) -> ThreatAnalysis {
        ThreatAnalysis::flagged(
            vec![SecurityAlert::new(
                AlertType::PromptInjection,
                level,
                "test",
                AlertSource::UserPrompt,
            )],
            confidence,
        )
    }

    fn enforcing_config() -> MonitorConfig {
        MonitorConfig {
            log_threats_only: false,
            ..MonitorConfig::default()
        }
    }

    #[test]
    fn blocking_is_reserved_for_critical() {
        let engine = PolicyEngine::new();

        assert!(engine.requires_blocking(ThreatLevel::Critical));
        assert!(!engine.requires_blocking(ThreatLevel::High));
        assert!(!engine.requires_blocking(ThreatLevel::Elevated));
        assert!(!engine.requires_blocking(ThreatLevel::Normal));
    }

    #[test]
    fn confirmation_matrix() {
        let engine = PolicyEngine::new();

        // High always confirms, regardless of confidence
        assert!(engine.requires_user_confirmation(ThreatLevel::High, 0.99));
        assert!(engine.requires_user_confirmation(ThreatLevel::High, 0.1));

        // Critical confirms only below the threshold
        assert!(engine.requires_user_confirmation(ThreatLevel::Critical, 0.79));
        assert!(!engine.requires_user_confirmation(ThreatLevel::Critical, 0.8));
        assert!(!engine.requires_user_confirmation(ThreatLevel::Critical, 0.95));

        // Lower levels never confirm
        assert!(!engine.requires_user_confirmation(ThreatLevel::Elevated, 0.1));
        assert!(!engine.requires_user_confirmation(ThreatLevel::Normal, 0.1));
    }

    #[test]
    fn clean_verdict_is_allowed() {
        let decision = PolicyEngine::new().decide(&ThreatAnalysis::clean(), &enforcing_config());
        assert_eq!(decision, PolicyDecision::Allow);
    }

    #[test]
    fn log_threats_only_downgrades_everything_to_allow() {
        let engine = PolicyEngine::new();
        let config = MonitorConfig::default();
        assert!(config.log_threats_only);

        for level in [ThreatLevel::Elevated, ThreatLevel::High, ThreatLevel::Critical] {
            assert_eq!(
                engine.decide(&analysis(level, 0.95), &config),
                PolicyDecision::Allow,
                "{level} should be log-only"
            );
        }
    }

    #[test]
    fn confident_critical_is_blocked() {
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::Critical, 0.95), &enforcing_config());
        assert_eq!(decision, PolicyDecision::Block);
    }

    #[test]
    fn uncertain_critical_asks_the_user() {
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::Critical, 0.5), &enforcing_config());
        assert_eq!(decision, PolicyDecision::RequireConfirmation);
    }

    #[test]
    fn uncertain_critical_blocks_when_prompting_is_off() {
        let config = MonitorConfig {
            prompt_on_high: false,
            ..enforcing_config()
        };
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::Critical, 0.5), &config);
        assert_eq!(decision, PolicyDecision::Block);
    }

    #[test]
    fn high_asks_the_user() {
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::High, 0.9), &enforcing_config());
        assert_eq!(decision, PolicyDecision::RequireConfirmation);
    }

    #[test]
    fn high_is_allowed_when_prompting_is_off() {
        let config = MonitorConfig {
            prompt_on_high: false,
            ..enforcing_config()
        };
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::High, 0.9), &config);
        assert_eq!(decision, PolicyDecision::Allow);
    }

    #[test]
    fn elevated_is_allowed() {
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::Elevated, 0.7), &enforcing_config());
        assert_eq!(decision, PolicyDecision::Allow);
    }

    #[test]
    fn critical_is_allowed_when_auto_block_is_off() {
        let config = MonitorConfig {
            auto_block_critical: false,
            prompt_on_high: false,
            ..enforcing_config()
        };
        let decision = PolicyEngine::new().decide(&analysis(ThreatLevel::Critical, 0.95), &config);
        assert_eq!(decision, PolicyDecision::Allow);
    }

    #[test]
    fn decision_display() {
        assert_eq!(PolicyDecision::Allow.to_string(), "allow");
        assert_eq!(
            PolicyDecision::RequireConfirmation.to_string(),
            "require_confirmation"
        );
        assert_eq!(PolicyDecision::Block.to_string(), "block");
    }
}
