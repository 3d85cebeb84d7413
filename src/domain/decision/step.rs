//! Wizard steps and their transition rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// A step in the guided questionnaire.
///
/// Forward flow is `Question -> Intuition -> Context -> Analysis`. The
/// `Confidence` variant is reserved in the step set but no transition ever
/// produces it; the confidence slider is rendered inside the `Analysis`
/// step instead. The dead variant is kept rather than collapsed so the
/// step vocabulary matches the questionnaire as shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Capture the decision question.
    Question,
    /// Record the initial gut reaction.
    Intuition,
    /// Gather options, stakes, and values.
    Context,
    /// Display the generated analysis.
    Analysis,
    /// Reserved; unreachable via forward transitions.
    Confidence,
}

impl WizardStep {
    /// Returns a short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Question => "Your question",
            Self::Intuition => "First instinct",
            Self::Context => "Options & context",
            Self::Analysis => "Analysis",
            Self::Confidence => "Confidence",
        }
    }

    /// Returns the next step in the forward sequence, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Question => Some(Self::Intuition),
            Self::Intuition => Some(Self::Context),
            Self::Context => Some(Self::Analysis),
            Self::Analysis | Self::Confidence => None,
        }
    }

    /// Returns the previous step in the sequence, if any.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Question | Self::Confidence => None,
            Self::Intuition => Some(Self::Question),
            Self::Context => Some(Self::Intuition),
            Self::Analysis => Some(Self::Context),
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Question, Intuition)
                | (Intuition, Question)
                | (Intuition, Context)
                | (Context, Intuition)
                | (Context, Analysis)
                | (Analysis, Context)
                // Invalidate-on-edit jumps straight back to the start.
                | (Analysis, Question)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Question => vec![Intuition],
            Intuition => vec![Question, Context],
            Context => vec![Intuition, Analysis],
            Analysis => vec![Context, Question],
            Confidence => vec![],
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Question
    }
}
