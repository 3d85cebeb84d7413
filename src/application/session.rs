//! The wizard session service.
//!
//! Owns the wizard aggregate, the randomness and delay ports, the
//! disclosure toggles, and the current safety advisory, and exposes the
//! event surface the presentation layer drives.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::domain::analysis::BiasType;
use crate::domain::foundation::ErrorCode;
use crate::domain::decision::{
    DecisionWizard, FieldChange, SafetyConcern, SafetyScreen, StepValidationError, WizardStep,
};
use crate::ports::{RandomSource, ReflectionDelay};

use super::disclosures::Disclosures;
use super::view::WizardView;

/// Fixed message for the unexpected-failure path. The draft is left
/// untouched when this is surfaced.
pub const MSG_GENERIC_FAILURE: &str =
    "Something went wrong generating your analysis. Please try again.";

/// Errors surfaced by session operations. All recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A step-local validation rule rejected the forward transition.
    #[error(transparent)]
    Validation(#[from] StepValidationError),

    /// A submission is already pending its reflection pause.
    #[error("An analysis is already being prepared")]
    SubmissionPending,

    /// The unexpected-failure fallback.
    #[error("{}", MSG_GENERIC_FAILURE)]
    Internal,
}

impl SessionError {
    /// The stable code for this error, carried in logs.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
            SessionError::SubmissionPending => ErrorCode::SubmissionPending,
            SessionError::Internal => ErrorCode::InternalError,
        }
    }
}

/// One interactive questionnaire session.
pub struct WizardSession {
    wizard: DecisionWizard,
    rng: Box<dyn RandomSource>,
    delay: Arc<dyn ReflectionDelay>,
    reflection_pause: Duration,
    safety_enabled: bool,
    disclosures: Disclosures,
    safety_concern: Option<SafetyConcern>,
    analyzing: bool,
}

impl WizardSession {
    /// Creates a session with explicit settings.
    pub fn new(
        rng: Box<dyn RandomSource>,
        delay: Arc<dyn ReflectionDelay>,
        reflection_pause: Duration,
        safety_enabled: bool,
    ) -> Self {
        Self {
            wizard: DecisionWizard::new(),
            rng,
            delay,
            reflection_pause,
            safety_enabled,
            disclosures: Disclosures::new(),
            safety_concern: None,
            analyzing: false,
        }
    }

    /// Creates a session from loaded configuration.
    pub fn from_config(
        config: &AppConfig,
        rng: Box<dyn RandomSource>,
        delay: Arc<dyn ReflectionDelay>,
    ) -> Self {
        Self::new(
            rng,
            delay,
            config.analysis.reflection_pause(),
            config.safety.enabled,
        )
    }

    /// Handles a field-change event from the presentation.
    ///
    /// Question edits are re-screened for safety; a match raises an
    /// advisory and opens the safety dialog without touching the step
    /// machine.
    pub fn apply_field_change(&mut self, change: FieldChange) {
        debug!(wizard = %self.wizard.id(), ?change, "field change");

        if let FieldChange::Question(text) = &change {
            self.rescreen_question(text);
        }
        self.wizard.apply(change);
    }

    fn rescreen_question(&mut self, text: &str) {
        if !self.safety_enabled {
            return;
        }
        let concern = SafetyScreen::screen(text);
        if let Some(concern) = &concern {
            if self.safety_concern.as_ref() != Some(concern) {
                warn!(
                    wizard = %self.wizard.id(),
                    term = %concern.matched_term,
                    "safety concern raised"
                );
                self.disclosures.safety_dialog_open = true;
            }
        }
        self.safety_concern = concern;
    }

    /// Attempts the forward transition from the current step.
    ///
    /// At the context step this is the submission path: it validates
    /// first, then suspends once on the reflection delay (no
    /// cancellation), then generates and stores the analysis. While the
    /// pause is pending the submit control is disabled via the
    /// `analyzing` view flag, and a re-entrant call is rejected. Any
    /// unexpected failure surfaces the fixed generic message and leaves
    /// the draft untouched.
    pub async fn advance(&mut self) -> Result<WizardStep, SessionError> {
        if self.analyzing {
            return Err(SessionError::SubmissionPending);
        }

        let submitting = self.wizard.step() == WizardStep::Context;
        if submitting {
            // Fail fast before the pause; advance() below records the
            // inline message on this path.
            if self.wizard.check_advance().is_err() {
                let failure = self.wizard.advance(self.rng.as_mut()).unwrap_err();
                return Err(failure.into());
            }
            self.analyzing = true;
            self.delay.pause(self.reflection_pause).await;
            self.analyzing = false;
        }

        let outcome = if submitting {
            // Generation runs before the aggregate stores anything, so an
            // unwind here leaves the wizard at the context step with the
            // draft intact.
            catch_unwind(AssertUnwindSafe(|| {
                self.wizard.advance(self.rng.as_mut())
            }))
            .map_err(|_| {
                error!(
                    wizard = %self.wizard.id(),
                    code = %ErrorCode::InternalError,
                    "analysis generation failed"
                );
                SessionError::Internal
            })?
        } else {
            self.wizard.advance(self.rng.as_mut())
        };

        let step = outcome?;
        if submitting {
            info!(wizard = %self.wizard.id(), "analysis generated");
        } else {
            info!(wizard = %self.wizard.id(), step = ?step, "advanced");
        }
        Ok(step)
    }

    /// Moves one step back, keeping all entered values.
    pub fn back(&mut self) -> WizardStep {
        let step = self.wizard.back();
        debug!(wizard = %self.wizard.id(), step = ?step, "went back");
        step
    }

    /// Starts over: restores field defaults, discards the analysis, and
    /// clears every disclosure toggle and advisory.
    pub fn reset(&mut self) {
        info!(wizard = %self.wizard.id(), "session reset");
        self.wizard.reset();
        self.disclosures.reset();
        self.safety_concern = None;
        self.analyzing = false;
    }

    // Secondary disclosure events. Pure local toggles.

    pub fn open_safety_dialog(&mut self) {
        self.disclosures.safety_dialog_open = true;
    }

    pub fn close_safety_dialog(&mut self) {
        self.disclosures.safety_dialog_open = false;
    }

    pub fn open_time_capsule_dialog(&mut self) {
        self.disclosures.time_capsule_dialog_open = true;
    }

    pub fn close_time_capsule_dialog(&mut self) {
        self.disclosures.time_capsule_dialog_open = false;
    }

    pub fn open_journal_dialog(&mut self) {
        self.disclosures.journal_dialog_open = true;
    }

    pub fn close_journal_dialog(&mut self) {
        self.disclosures.journal_dialog_open = false;
    }

    /// Marks the follow-up reminder scheduled (in memory only).
    pub fn schedule_time_capsule(&mut self) {
        self.disclosures.schedule_time_capsule();
        info!(wizard = %self.wizard.id(), "time capsule scheduled");
    }

    /// Marks the decision summary saved (in memory only).
    pub fn save_journal(&mut self) {
        self.disclosures.save_journal();
        info!(wizard = %self.wizard.id(), "journal entry saved");
    }

    /// Expands or collapses the detail panel for one detected bias.
    pub fn toggle_bias_detail(&mut self, bias_type: BiasType) {
        self.disclosures.toggle_bias_detail(bias_type);
    }

    /// Reveals the third-option suggestion.
    pub fn reveal_third_option(&mut self) {
        self.disclosures.third_option_revealed = true;
    }

    /// Derives the current view snapshot.
    pub fn view(&self) -> WizardView {
        WizardView::derive(
            &self.wizard,
            &self.disclosures,
            self.safety_concern.as_ref(),
            self.analyzing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{NoDelay, SeededSource};
    use crate::domain::decision::{CoreValue, OptionSlot, MSG_OPTION_REQUIRED};

    fn session() -> WizardSession {
        WizardSession::new(
            Box::new(SeededSource::new(21)),
            Arc::new(NoDelay::new()),
            Duration::from_millis(0),
            true,
        )
    }

    async fn fill_to_context(session: &mut WizardSession) {
        session.apply_field_change(FieldChange::Question("Should I move cities?".into()));
        session.advance().await.unwrap();
        session.apply_field_change(FieldChange::Intuition("probably".into()));
        session.advance().await.unwrap();
    }

    #[tokio::test]
    async fn full_walkthrough_reaches_analysis() {
        let mut session = session();
        fill_to_context(&mut session).await;
        session.apply_field_change(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });

        let step = session.advance().await.unwrap();
        assert_eq!(step, WizardStep::Analysis);

        let view = session.view();
        assert!(view.submitted);
        assert!(view.analysis.is_some());
        assert!(!view.analyzing);
    }

    #[tokio::test]
    async fn submission_validation_fails_before_the_pause() {
        let mut session = session();
        fill_to_context(&mut session).await;

        let err = session.advance().await.unwrap_err();
        assert_eq!(
            err,
            SessionError::Validation(StepValidationError::OptionRequired)
        );
        assert_eq!(
            session.view().validation_message.as_deref(),
            Some(MSG_OPTION_REQUIRED)
        );
        assert!(!session.view().analyzing);
    }

    /// Source that blows up partway through a generation.
    struct FaultySource {
        draws_left: u32,
    }

    impl crate::ports::RandomSource for FaultySource {
        fn next_f64(&mut self) -> f64 {
            if self.draws_left == 0 {
                panic!("random source exhausted");
            }
            self.draws_left -= 1;
            0.5
        }
    }

    #[tokio::test]
    async fn generation_failure_surfaces_generic_message_and_keeps_draft() {
        let mut session = WizardSession::new(
            Box::new(FaultySource { draws_left: 2 }),
            Arc::new(NoDelay::new()),
            Duration::from_millis(0),
            true,
        );
        fill_to_context(&mut session).await;
        session.apply_field_change(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });

        let err = session.advance().await.unwrap_err();
        assert_eq!(err, SessionError::Internal);
        assert_eq!(err.to_string(), MSG_GENERIC_FAILURE);

        // Form state is untouched: still at context, draft intact, no
        // half-built analysis, and the session accepts further events.
        let view = session.view();
        assert_eq!(view.step, WizardStep::Context);
        assert!(view.analysis.is_none());
        assert!(!view.submitted);
        assert!(!view.analyzing);
        assert_eq!(view.question, "Should I move cities?");
        assert_eq!(view.options[0], "Move");
        session.apply_field_change(FieldChange::Stakes("the lease".into()));
        assert_eq!(session.view().stakes, "the lease");
    }

    #[test]
    fn session_errors_map_to_stable_codes() {
        assert_eq!(
            SessionError::Validation(StepValidationError::OptionRequired).code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            SessionError::SubmissionPending.code(),
            ErrorCode::SubmissionPending
        );
        assert_eq!(SessionError::Internal.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn safety_screening_raises_and_clears_advisory() {
        let mut session = session();
        session.apply_field_change(FieldChange::Question(
            "Should I get revenge on my neighbor?".into(),
        ));

        let view = session.view();
        let concern = view.safety_concern.expect("advisory expected");
        assert_eq!(concern.matched_term, "revenge");
        assert!(view.disclosures.safety_dialog_open);
        // Advisory never blocks the wizard.
        assert_eq!(view.step, WizardStep::Question);

        session.apply_field_change(FieldChange::Question("Should I move?".into()));
        assert!(session.view().safety_concern.is_none());
    }

    #[tokio::test]
    async fn safety_screening_can_be_disabled() {
        let mut session = WizardSession::new(
            Box::new(SeededSource::new(3)),
            Arc::new(NoDelay::new()),
            Duration::from_millis(0),
            false,
        );
        session.apply_field_change(FieldChange::Question("revenge?".into()));
        assert!(session.view().safety_concern.is_none());
    }

    #[tokio::test]
    async fn dropped_submission_leaves_controls_disabled_until_reset() {
        // No cancellation support: dropping the submit future mid-pause
        // leaves the analyzing flag set, and further submits are refused.
        let mut session = WizardSession::new(
            Box::new(SeededSource::new(5)),
            Arc::new(crate::adapters::TokioDelay::new()),
            Duration::from_secs(60),
            true,
        );
        fill_to_context(&mut session).await;
        session.apply_field_change(FieldChange::Option {
            slot: OptionSlot::First,
            text: "Move".into(),
        });

        {
            let fut = session.advance();
            tokio::pin!(fut);
            let poll = futures_poll_once(fut.as_mut()).await;
            assert!(poll.is_none(), "should still be pausing");
        } // future dropped here, mid-pause

        assert!(session.view().analyzing);
        assert_eq!(
            session.advance().await.unwrap_err(),
            SessionError::SubmissionPending
        );

        session.reset();
        assert!(!session.view().analyzing);
    }

    /// Polls a future exactly once.
    async fn futures_poll_once<F: std::future::Future>(
        fut: std::pin::Pin<&mut F>,
    ) -> Option<F::Output> {
        use std::task::Poll;
        let mut fut = Some(fut);
        std::future::poll_fn(move |cx| {
            let polled = fut.take().unwrap().poll(cx);
            match polled {
                Poll::Ready(out) => Poll::Ready(Some(out)),
                Poll::Pending => Poll::Ready(None),
            }
        })
        .await
    }

    #[tokio::test]
    async fn reset_clears_disclosures_and_advisory() {
        let mut session = session();
        session.apply_field_change(FieldChange::Question("revenge".into()));
        session.reveal_third_option();
        session.schedule_time_capsule();
        session.save_journal();
        session.toggle_bias_detail(BiasType::LossAversion);

        session.reset();
        let view = session.view();
        assert_eq!(view.disclosures, Disclosures::default());
        assert!(view.safety_concern.is_none());
        assert_eq!(view.step, WizardStep::Question);
        assert_eq!(view.balance_score, 50);
        assert_eq!(view.confidence_score, 70);
    }

    #[tokio::test]
    async fn disclosure_events_round_trip() {
        let mut session = session();
        session.open_journal_dialog();
        assert!(session.view().disclosures.journal_dialog_open);
        session.close_journal_dialog();
        assert!(!session.view().disclosures.journal_dialog_open);

        session.open_time_capsule_dialog();
        session.schedule_time_capsule();
        let d = session.view().disclosures;
        assert!(d.time_capsule_scheduled);
        assert!(!d.time_capsule_dialog_open);
    }

    #[tokio::test]
    async fn values_toggle_through_the_session_respects_cap() {
        let mut session = session();
        for value in [
            CoreValue::Family,
            CoreValue::Career,
            CoreValue::Health,
            CoreValue::Freedom,
        ] {
            session.apply_field_change(FieldChange::ToggleValue(value));
        }
        assert_eq!(session.view().values.len(), 3);
    }
}
