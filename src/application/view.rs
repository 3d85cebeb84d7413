//! The derived view snapshot consumed by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::{CoreValue, DecisionWizard, SafetyConcern, WizardStep};

use super::disclosures::Disclosures;

/// Owned snapshot of everything the presentation renders.
///
/// Recomputed from session state after every event; carries no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardView {
    pub step: WizardStep,
    pub question: String,
    pub balance_score: u8,
    pub time_horizon: u8,
    pub options: [String; 2],
    pub stakes: String,
    pub values: Vec<CoreValue>,
    pub initial_intuition: String,
    pub confidence_score: u8,
    /// The current inline validation message, if any.
    pub validation_message: Option<String>,
    /// The stored analysis, present only after a successful submission.
    pub analysis: Option<AnalysisResult>,
    pub submitted: bool,
    /// True while a submission is pending its reflection pause; the
    /// presentation disables the submit control on this flag.
    pub analyzing: bool,
    pub disclosures: Disclosures,
    /// Advisory raised by content-safety screening, if any.
    pub safety_concern: Option<SafetyConcern>,
}

impl WizardView {
    /// Derives the snapshot from current session parts.
    pub fn derive(
        wizard: &DecisionWizard,
        disclosures: &Disclosures,
        safety_concern: Option<&SafetyConcern>,
        analyzing: bool,
    ) -> Self {
        let draft = wizard.draft();
        Self {
            step: wizard.step(),
            question: draft.question.clone(),
            balance_score: draft.balance_score.value(),
            time_horizon: draft.time_horizon.value(),
            options: draft.options.clone(),
            stakes: draft.stakes.clone(),
            values: draft.values.clone(),
            initial_intuition: draft.initial_intuition.clone(),
            confidence_score: draft.confidence_score.value(),
            validation_message: wizard.validation_message().map(str::to_string),
            analysis: wizard.analysis().cloned(),
            submitted: wizard.is_submitted(),
            analyzing,
            disclosures: disclosures.clone(),
            safety_concern: safety_concern.cloned(),
        }
    }
}
