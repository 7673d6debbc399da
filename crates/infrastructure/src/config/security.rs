//! Content-security engine configuration

use application::{ApplicationError, ConfidenceModel, MonitorConfig, SecurityMonitor};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Settings for the content-security engine
///
/// Field defaults match the engine's built-in configuration: scanning on,
/// log-only enforcement, a 10,000-entry audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSecurityConfig {
    /// Master switch for all scanning
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Block deliveries for critical findings
    #[serde(default = "default_true")]
    pub auto_block_critical: bool,

    /// Ask the user on confirmation-worthy findings
    #[serde(default = "default_true")]
    pub prompt_on_high: bool,

    /// Record threats without enforcing any policy
    #[serde(default = "default_true")]
    pub log_threats_only: bool,

    /// Reserved for periodic background scans
    #[serde(default)]
    pub background_monitoring: bool,

    /// Audit log capacity; oldest entries are evicted beyond this
    #[serde(default = "default_max_audit_entries")]
    pub max_audit_entries: usize,

    /// Confidence added per matched rule beyond the first
    #[serde(default = "default_multi_match_bonus")]
    pub multi_match_bonus: f32,

    /// Upper bound for flagged confidences; must stay below 1.0
    #[serde(default = "default_confidence_ceiling")]
    pub confidence_ceiling: f32,
}

const fn default_max_audit_entries() -> usize {
    10_000
}

const fn default_multi_match_bonus() -> f32 {
    0.05
}

const fn default_confidence_ceiling() -> f32 {
    0.99
}

impl Default for ContentSecurityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_block_critical: true,
            prompt_on_high: true,
            log_threats_only: true,
            background_monitoring: false,
            max_audit_entries: default_max_audit_entries(),
            multi_match_bonus: default_multi_match_bonus(),
            confidence_ceiling: default_confidence_ceiling(),
        }
    }
}

impl ContentSecurityConfig {
    /// Convert into the engine's runtime configuration
    #[must_use]
    pub const fn to_monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            enabled: self.enabled,
            auto_block_critical: self.auto_block_critical,
            prompt_on_high: self.prompt_on_high,
            log_threats_only: self.log_threats_only,
            background_monitoring: self.background_monitoring,
            max_audit_entries: self.max_audit_entries,
            confidence: ConfidenceModel {
                multi_match_bonus: self.multi_match_bonus,
                ceiling: self.confidence_ceiling,
            },
        }
    }

    /// Build a monitor from these settings
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when the settings fail
    /// engine validation.
    pub fn build_monitor(&self) -> Result<SecurityMonitor, ApplicationError> {
        SecurityMonitor::new(self.to_monitor_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine_defaults() {
        let config = ContentSecurityConfig::default();
        assert_eq!(config.to_monitor_config(), MonitorConfig::default());
    }

    #[test]
    fn toml_round_trip() {
        let config = ContentSecurityConfig {
            log_threats_only: false,
            max_audit_entries: 2_000,
            ..ContentSecurityConfig::default()
        };

        let serialized = toml::to_string(&config).unwrap();
        let parsed: ContentSecurityConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn build_monitor_applies_settings() {
        let config = ContentSecurityConfig {
            enabled: false,
            ..ContentSecurityConfig::default()
        };

        let monitor = config.build_monitor().unwrap();
        assert!(!monitor.config().enabled);
        assert!(monitor.analyze_incoming_prompt("jailbreak").is_clean);
    }

    #[test]
    fn invalid_settings_are_rejected_at_build() {
        let config = ContentSecurityConfig {
            max_audit_entries: 0,
            ..ContentSecurityConfig::default()
        };
        assert!(config.build_monitor().is_err());
    }

    #[test]
    fn out_of_range_ceiling_is_rejected() {
        let config = ContentSecurityConfig {
            confidence_ceiling: 1.0,
            ..ContentSecurityConfig::default()
        };
        assert!(config.build_monitor().is_err());
    }
}
