//! Content-safety screening of the live question text.
//!
//! Screening is advisory only: a match raises a support message alongside
//! the wizard, it never blocks or alters the step machine.

use serde::{Deserialize, Serialize};

/// Case-insensitive denylist of harm-adjacent terms.
///
/// Fixed at compile time; matched as substrings of the lowercased question.
pub const HARMFUL_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "self-harm",
    "self harm",
    "hurt myself",
    "hurt someone",
    "kill someone",
    "revenge",
    "violence",
    "illegal",
    "crime",
];

/// The fixed support message shown when screening matches.
pub const SUPPORT_MESSAGE: &str = "It sounds like you may be going through something \
    serious. This tool is not equipped to help with decisions involving harm. \
    Please reach out to someone who can support you.";

/// Crisis-resource destination referenced by the advisory.
pub const CRISIS_RESOURCE_URL: &str = "https://findahelpline.com";

/// An advisory raised when the question text matches the denylist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyConcern {
    /// The denylist term that matched.
    pub matched_term: String,
    /// Fixed support message for display.
    pub message: String,
    /// Link to an external crisis resource.
    pub resource_url: String,
}

/// Screens question text against the denylist.
pub struct SafetyScreen;

impl SafetyScreen {
    /// Returns an advisory if the text contains any denylisted term.
    ///
    /// Matching is case-insensitive; the first matching term in catalog
    /// order is reported.
    pub fn screen(text: &str) -> Option<SafetyConcern> {
        let lowered = text.to_lowercase();
        HARMFUL_KEYWORDS
            .iter()
            .find(|term| lowered.contains(*term))
            .map(|term| SafetyConcern {
                matched_term: (*term).to_string(),
                message: SUPPORT_MESSAGE.to_string(),
                resource_url: CRISIS_RESOURCE_URL.to_string(),
            })
    }
}
