//! Secondary disclosure toggles around the analysis view.
//!
//! Independent booleans with no ordering constraints between them; they
//! read wizard state but never feed back into the step machine.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::BiasType;

/// The secondary toggle state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosures {
    /// Safety-warning dialog visibility.
    pub safety_dialog_open: bool,
    /// Time-capsule dialog visibility.
    pub time_capsule_dialog_open: bool,
    /// Journal dialog visibility.
    pub journal_dialog_open: bool,
    /// Which bias, if any, has its detail panel expanded.
    pub revealed_bias: Option<BiasType>,
    /// Whether the third-option suggestion has been revealed.
    pub third_option_revealed: bool,
    /// Whether a follow-up reminder was marked scheduled. No backend;
    /// purely an in-memory marker.
    pub time_capsule_scheduled: bool,
    /// Whether the decision summary was marked saved. No backend.
    pub journal_saved: bool,
}

impl Disclosures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands the detail panel for one bias, collapsing any other.
    /// Revealing the already-open bias collapses it.
    pub fn toggle_bias_detail(&mut self, bias_type: BiasType) {
        if self.revealed_bias == Some(bias_type) {
            self.revealed_bias = None;
        } else {
            self.revealed_bias = Some(bias_type);
        }
    }

    /// Marks the time capsule scheduled and closes its dialog.
    pub fn schedule_time_capsule(&mut self) {
        self.time_capsule_scheduled = true;
        self.time_capsule_dialog_open = false;
    }

    /// Marks the journal entry saved and closes its dialog.
    pub fn save_journal(&mut self) {
        self.journal_saved = true;
        self.journal_dialog_open = false;
    }

    /// Clears every toggle back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
