//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `DECISION_COMPASS` prefix and nested values use double underscores as
//! separators, e.g. `DECISION_COMPASS__ANALYSIS__REFLECTION_PAUSE_MS=500`.

mod analysis;
mod error;
mod safety;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use safety::SafetyConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has workable defaults; an empty environment yields a
/// valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Submission/analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Content-safety screening configuration
    #[serde(default)]
    pub safety: SafetyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads
    /// environment variables with the `DECISION_COMPASS` prefix.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        Ok(())
    }
}
