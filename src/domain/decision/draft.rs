//! The mutable decision draft filled in across the wizard steps.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::values::{CoreValue, MAX_SELECTED_VALUES};

/// Default balance slider position (neither emotional nor logical).
const DEFAULT_BALANCE: u8 = 50;
/// Default time-horizon slider position.
const DEFAULT_HORIZON: u8 = 50;
/// Default post-analysis confidence rating.
const DEFAULT_CONFIDENCE: u8 = 70;

/// One in-progress decision record.
///
/// Created with defaults when a wizard session starts, mutated field by
/// field as the user works through the steps, and discarded wholesale on
/// reset. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDraft {
    /// The decision question. Required before leaving the first step.
    pub question: String,
    /// 0 = fully emotional, 100 = fully logical.
    pub balance_score: Percentage,
    /// 0 = short-term focus, 100 = long-term focus.
    pub time_horizon: Percentage,
    /// Exactly two option slots; either may be left empty.
    pub options: [String; 2],
    /// What is at stake. Free text, optional.
    pub stakes: String,
    /// Selected values, at most three, in selection order.
    pub values: Vec<CoreValue>,
    /// The recorded gut reaction. Required before leaving the second step.
    pub initial_intuition: String,
    /// Self-rated confidence, settable only once an analysis exists.
    pub confidence_score: Percentage,
}

impl DecisionDraft {
    /// Creates a fresh draft with documented defaults.
    pub fn new() -> Self {
        Self {
            question: String::new(),
            balance_score: Percentage::new(DEFAULT_BALANCE),
            time_horizon: Percentage::new(DEFAULT_HORIZON),
            options: [String::new(), String::new()],
            stakes: String::new(),
            values: Vec::new(),
            initial_intuition: String::new(),
            confidence_score: Percentage::new(DEFAULT_CONFIDENCE),
        }
    }

    /// Toggles a value selection.
    ///
    /// Selecting an already-selected value removes it. Selecting a new value
    /// while three are already chosen is ignored, so the selection can never
    /// exceed [`MAX_SELECTED_VALUES`].
    pub fn toggle_value(&mut self, value: CoreValue) {
        if let Some(pos) = self.values.iter().position(|v| *v == value) {
            self.values.remove(pos);
        } else if self.values.len() < MAX_SELECTED_VALUES {
            self.values.push(value);
        }
    }

    /// True if the question has any non-whitespace content.
    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }

    /// True if the intuition has any non-whitespace content.
    pub fn has_intuition(&self) -> bool {
        !self.initial_intuition.trim().is_empty()
    }

    /// True if at least one option slot is filled.
    pub fn has_any_option(&self) -> bool {
        self.options.iter().any(|o| !o.trim().is_empty())
    }

    /// True if both option slots are filled.
    pub fn has_both_options(&self) -> bool {
        self.options.iter().all(|o| !o.trim().is_empty())
    }

    /// True if the stakes field has content.
    pub fn has_stakes(&self) -> bool {
        !self.stakes.trim().is_empty()
    }

    /// Returns the non-empty options, slot order preserved.
    pub fn filled_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect()
    }
}

impl Default for DecisionDraft {
    fn default() -> Self {
        Self::new()
    }
}
