//! Content-safety screening configuration

use serde::Deserialize;

/// Configuration for the question-text safety screen.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyConfig {
    /// Whether the denylist screen runs on question edits.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
