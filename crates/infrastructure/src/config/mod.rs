//! Application configuration
//!
//! One `security` section for the content-security engine. Loaded from an
//! optional `config` file, overridden by `SENTINEL_*` environment
//! variables (e.g. `SENTINEL_SECURITY_ENABLED=false`).

mod security;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use security::ContentSecurityConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content-security engine settings
    #[serde(default)]
    pub security: ContentSecurityConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` when a source cannot be read or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SENTINEL_SECURITY_ENABLED)
            .add_source(
                config::Environment::with_prefix("SENTINEL")
                    .separator("_")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            enabled = config.security.enabled,
            max_audit_entries = config.security.max_audit_entries,
            "configuration loaded"
        );
        Ok(config)
    }
}
