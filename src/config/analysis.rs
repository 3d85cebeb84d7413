//! Analysis submission configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Default reflection pause before an analysis is revealed, in ms.
const DEFAULT_REFLECTION_PAUSE_MS: u64 = 1500;

/// Upper bound on the configurable pause; anything longer would read as
/// a hang rather than a pause.
const MAX_REFLECTION_PAUSE_MS: u64 = 30_000;

/// Configuration for the submission step.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Artificial pause before revealing the generated analysis, in ms.
    #[serde(default = "default_reflection_pause_ms")]
    pub reflection_pause_ms: u64,
}

fn default_reflection_pause_ms() -> u64 {
    DEFAULT_REFLECTION_PAUSE_MS
}

impl AnalysisConfig {
    /// Returns the pause as a Duration.
    pub fn reflection_pause(&self) -> Duration {
        Duration::from_millis(self.reflection_pause_ms)
    }

    /// Validates the configured values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reflection_pause_ms > MAX_REFLECTION_PAUSE_MS {
            return Err(ValidationError::ReflectionPauseTooLong(
                MAX_REFLECTION_PAUSE_MS,
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reflection_pause_ms: DEFAULT_REFLECTION_PAUSE_MS,
        }
    }
}
