//! The wizard aggregate: current step, draft fields, and transitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::{AnalysisGenerator, AnalysisResult};
use crate::domain::foundation::{Percentage, Timestamp, WizardId};
use crate::ports::RandomSource;

use super::draft::DecisionDraft;
use super::step::WizardStep;
use super::values::CoreValue;

/// Inline message when advancing without a question.
pub const MSG_QUESTION_REQUIRED: &str = "Please enter a decision question";
/// Inline message when advancing without an intuition.
pub const MSG_INTUITION_REQUIRED: &str = "Please share your initial intuition";
/// Inline message when submitting without any option.
pub const MSG_OPTION_REQUIRED: &str = "Please enter at least one option you are considering";

/// One of the two option slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSlot {
    First,
    Second,
}

impl OptionSlot {
    fn index(&self) -> usize {
        match self {
            OptionSlot::First => 0,
            OptionSlot::Second => 1,
        }
    }
}

/// A field-change event from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Question(String),
    BalanceScore(i64),
    TimeHorizon(i64),
    Option { slot: OptionSlot, text: String },
    Stakes(String),
    ToggleValue(CoreValue),
    Intuition(String),
    ConfidenceScore(i64),
}

/// A forward transition rejected by step-local validation.
///
/// Recoverable by design: the wizard stays on the current step and keeps
/// the fixed message for inline display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepValidationError {
    #[error("Please enter a decision question")]
    QuestionRequired,
    #[error("Please share your initial intuition")]
    IntuitionRequired,
    #[error("Please enter at least one option you are considering")]
    OptionRequired,
}

impl StepValidationError {
    /// The fixed inline message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            StepValidationError::QuestionRequired => MSG_QUESTION_REQUIRED,
            StepValidationError::IntuitionRequired => MSG_INTUITION_REQUIRED,
            StepValidationError::OptionRequired => MSG_OPTION_REQUIRED,
        }
    }
}

/// The wizard aggregate for one decision session.
///
/// Holds the linear step position, the mutable draft, the generated
/// analysis once submitted, and the single inline validation message.
/// Everything lives in memory and is discarded on reset.
#[derive(Debug, Clone)]
pub struct DecisionWizard {
    id: WizardId,
    created_at: Timestamp,
    step: WizardStep,
    draft: DecisionDraft,
    submitted: bool,
    analysis: Option<AnalysisResult>,
    validation_message: Option<&'static str>,
}

impl DecisionWizard {
    /// Starts a fresh wizard at the question step with default fields.
    pub fn new() -> Self {
        Self {
            id: WizardId::new(),
            created_at: Timestamp::now(),
            step: WizardStep::Question,
            draft: DecisionDraft::new(),
            submitted: false,
            analysis: None,
            validation_message: None,
        }
    }

    pub fn id(&self) -> WizardId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &DecisionDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        self.validation_message
    }

    /// Applies a field-change event.
    ///
    /// Every edit clears the inline validation message. Editing the
    /// question after submission invalidates the stored analysis, clears
    /// the submitted flag, and forces the wizard back to the question
    /// step; edits to any other field leave an existing analysis alone.
    /// The confidence score is accepted only once an analysis exists.
    pub fn apply(&mut self, change: FieldChange) {
        self.validation_message = None;

        match change {
            FieldChange::Question(text) => {
                if self.submitted {
                    self.submitted = false;
                    self.analysis = None;
                    self.step = WizardStep::Question;
                }
                self.draft.question = text;
            }
            FieldChange::BalanceScore(value) => {
                self.draft.balance_score = Percentage::from_clamped(value);
            }
            FieldChange::TimeHorizon(value) => {
                self.draft.time_horizon = Percentage::from_clamped(value);
            }
            FieldChange::Option { slot, text } => {
                self.draft.options[slot.index()] = text;
            }
            FieldChange::Stakes(text) => {
                self.draft.stakes = text;
            }
            FieldChange::ToggleValue(value) => {
                self.draft.toggle_value(value);
            }
            FieldChange::Intuition(text) => {
                self.draft.initial_intuition = text;
            }
            FieldChange::ConfidenceScore(value) => {
                if self.analysis.is_some() {
                    self.draft.confidence_score = Percentage::from_clamped(value);
                }
            }
        }
    }

    /// Validates the current step's forward rule without moving.
    pub fn check_advance(&self) -> Result<(), StepValidationError> {
        match self.step {
            WizardStep::Question if !self.draft.has_question() => {
                Err(StepValidationError::QuestionRequired)
            }
            WizardStep::Intuition if !self.draft.has_intuition() => {
                Err(StepValidationError::IntuitionRequired)
            }
            WizardStep::Context if !self.draft.has_any_option() => {
                Err(StepValidationError::OptionRequired)
            }
            _ => Ok(()),
        }
    }

    /// Attempts the forward transition from the current step.
    ///
    /// On validation failure the wizard stays put and records the fixed
    /// inline message. The Context -> Analysis transition runs the
    /// generator and stores its result, replacing any prior analysis
    /// wholesale. Advancing from the analysis step is a no-op.
    pub fn advance(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> Result<WizardStep, StepValidationError> {
        if let Err(failure) = self.check_advance() {
            self.validation_message = Some(failure.message());
            return Err(failure);
        }
        self.validation_message = None;

        match self.step {
            WizardStep::Question => self.step = WizardStep::Intuition,
            WizardStep::Intuition => self.step = WizardStep::Context,
            WizardStep::Context => {
                self.analysis = Some(AnalysisGenerator::generate(&self.draft, rng));
                self.submitted = true;
                self.step = WizardStep::Analysis;
            }
            WizardStep::Analysis | WizardStep::Confidence => {}
        }
        Ok(self.step)
    }

    /// Moves one step back, never clearing entered field values.
    ///
    /// Returns the step after the move; a no-op at the first step. The
    /// inline message is step-local, so leaving the step drops it.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.validation_message = None;
        }
        self.step
    }

    /// Restores every field to its default, discards the analysis, and
    /// returns to the question step. The wizard id is kept.
    pub fn reset(&mut self) {
        self.draft = DecisionDraft::new();
        self.step = WizardStep::Question;
        self.submitted = false;
        self.analysis = None;
        self.validation_message = None;
    }
}

impl Default for DecisionWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededSource;

    fn rng() -> SeededSource {
        SeededSource::new(17)
    }

    fn wizard_at_context() -> DecisionWizard {
        let mut wizard = DecisionWizard::new();
        wizard.apply(FieldChange::Question("Should I move cities?".into()));
        wizard.advance(&mut rng()).unwrap();
        wizard.apply(FieldChange::Intuition("yes".into()));
        wizard.advance(&mut rng()).unwrap();
        wizard
    }

    #[test]
    fn new_wizard_starts_at_question() {
        let wizard = DecisionWizard::new();
        assert_eq!(wizard.step(), WizardStep::Question);
        assert!(!wizard.is_submitted());
        assert!(wizard.analysis().is_none());
        assert!(wizard.validation_message().is_none());
    }

    #[test]
    fn advance_with_empty_question_stays_and_reports() {
        let mut wizard = DecisionWizard::new();
        let result = wizard.advance(&mut rng());

        assert_eq!(result, Err(StepValidationError::QuestionRequired));
        assert_eq!(wizard.step(), WizardStep::Question);
        assert_eq!(wizard.validation_message(), Some(MSG_QUESTION_REQUIRED));
    }

    #[test]
    fn advance_with_question_moves_to_intuition_and_clears_message() {
        let mut wizard = DecisionWizard::new();
        let _ = wizard.advance(&mut rng()); // plant a message
        wizard.apply(FieldChange::Question("Should I quit?".into()));

        let step = wizard.advance(&mut rng()).unwrap();
        assert_eq!(step, WizardStep::Intuition);
        assert!(wizard.validation_message().is_none());
    }

    #[test]
    fn advance_with_empty_intuition_reports_fixed_message() {
        let mut wizard = DecisionWizard::new();
        wizard.apply(FieldChange::Question("q".into()));
        wizard.advance(&mut rng()).unwrap();

        let result = wizard.advance(&mut rng());
        assert_eq!(result, Err(StepValidationError::IntuitionRequired));
        assert_eq!(wizard.validation_message(), Some(MSG_INTUITION_REQUIRED));
        assert_eq!(wizard.step(), WizardStep::Intuition);
    }

    #[test]
    fn submission_with_no_options_fails_with_fixed_message() {
        let mut wizard = wizard_at_context();
        let result = wizard.advance(&mut rng());

        assert_eq!(result, Err(StepValidationError::OptionRequired));
        assert_eq!(wizard.validation_message(), Some(MSG_OPTION_REQUIRED));
        assert_eq!(wizard.step(), WizardStep::Context);
        assert!(wizard.analysis().is_none());
    }

    #[test]
    fn submission_with_one_option_produces_analysis() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::Second,
            text: "Stay".into(),
        });

        let step = wizard.advance(&mut rng()).unwrap();
        assert_eq!(step, WizardStep::Analysis);
        assert!(wizard.is_submitted());
        assert!(wizard.analysis().is_some());
    }

    #[test]
    fn editing_question_after_submission_invalidates_everything() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut rng()).unwrap();
        assert!(wizard.is_submitted());

        wizard.apply(FieldChange::Question("A different question?".into()));

        assert!(!wizard.is_submitted());
        assert!(wizard.analysis().is_none());
        assert_eq!(wizard.step(), WizardStep::Question);
        assert_eq!(wizard.draft().question, "A different question?");
    }

    #[test]
    fn editing_other_fields_after_submission_keeps_analysis() {
        // Asymmetric by design: only question edits invalidate.
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut rng()).unwrap();

        wizard.apply(FieldChange::Stakes("my savings".into()));
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::Second,
            text: "Stay".into(),
        });
        wizard.apply(FieldChange::Intuition("changed my mind".into()));

        assert!(wizard.is_submitted());
        assert!(wizard.analysis().is_some());
        assert_eq!(wizard.step(), WizardStep::Analysis);
    }

    #[test]
    fn confidence_is_ignored_until_analysis_exists() {
        let mut wizard = DecisionWizard::new();
        wizard.apply(FieldChange::ConfidenceScore(90));
        assert_eq!(wizard.draft().confidence_score.value(), 70);

        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut rng()).unwrap();

        wizard.apply(FieldChange::ConfidenceScore(90));
        assert_eq!(wizard.draft().confidence_score.value(), 90);
    }

    #[test]
    fn slider_edits_clamp_to_range() {
        let mut wizard = DecisionWizard::new();
        wizard.apply(FieldChange::BalanceScore(180));
        wizard.apply(FieldChange::TimeHorizon(-5));
        assert_eq!(wizard.draft().balance_score.value(), 100);
        assert_eq!(wizard.draft().time_horizon.value(), 0);
    }

    #[test]
    fn back_never_clears_field_values() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });

        assert_eq!(wizard.back(), WizardStep::Intuition);
        assert_eq!(wizard.back(), WizardStep::Question);
        assert_eq!(wizard.back(), WizardStep::Question); // no-op at start

        assert_eq!(wizard.draft().question, "Should I move cities?");
        assert_eq!(wizard.draft().initial_intuition, "yes");
        assert_eq!(wizard.draft().options[0], "Move");
    }

    #[test]
    fn back_from_analysis_returns_to_context_keeping_analysis() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut rng()).unwrap();

        assert_eq!(wizard.back(), WizardStep::Context);
        assert!(wizard.analysis().is_some());
        assert!(wizard.is_submitted());
    }

    #[test]
    fn resubmission_replaces_the_analysis_wholesale() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut SeededSource::new(1)).unwrap();
        let first = wizard.analysis().unwrap().clone();

        wizard.back();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::Second,
            text: "Stay put".into(),
        });
        wizard.advance(&mut SeededSource::new(2)).unwrap();
        let second = wizard.analysis().unwrap();

        assert_ne!(&first, second);
        assert_eq!(second.option_positions.len(), 2);
    }

    #[test]
    fn reset_restores_every_documented_default() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::BalanceScore(90));
        wizard.apply(FieldChange::TimeHorizon(10));
        wizard.apply(FieldChange::Stakes("everything".into()));
        wizard.apply(FieldChange::ToggleValue(CoreValue::Family));
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut rng()).unwrap();

        wizard.reset();

        assert_eq!(wizard.step(), WizardStep::Question);
        assert_eq!(wizard.draft(), &DecisionDraft::new());
        assert!(!wizard.is_submitted());
        assert!(wizard.analysis().is_none());
        assert!(wizard.validation_message().is_none());
    }

    #[test]
    fn advance_from_analysis_is_a_no_op() {
        let mut wizard = wizard_at_context();
        wizard.apply(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });
        wizard.advance(&mut rng()).unwrap();
        let before = wizard.analysis().unwrap().clone();

        let step = wizard.advance(&mut rng()).unwrap();
        assert_eq!(step, WizardStep::Analysis);
        assert_eq!(wizard.analysis().unwrap(), &before);
    }
}
