//! Property tests over the analysis generator.
//!
//! These exercise the generator across the full slider ranges and many
//! seeds, checking the invariants that must hold regardless of which
//! random branch fires.

use proptest::prelude::*;

use decision_compass::adapters::SeededSource;
use decision_compass::domain::analysis::{
    AnalysisGenerator, BiasType, FACTOR_EMOTIONAL, FACTOR_FINANCIAL,
};
use decision_compass::domain::decision::{CoreValue, DecisionDraft};
use decision_compass::domain::foundation::Percentage;

fn draft(balance: u8, horizon: u8) -> DecisionDraft {
    let mut draft = DecisionDraft::new();
    draft.question = "Should I?".to_string();
    draft.balance_score = Percentage::new(balance);
    draft.time_horizon = Percentage::new(horizon);
    draft.initial_intuition = "maybe".to_string();
    draft
}

fn value_subset() -> impl Strategy<Value = Vec<CoreValue>> {
    proptest::sample::subsequence(CoreValue::ALL.to_vec(), 0..=3)
}

proptest! {
    /// The framing percentage always matches the branch: the raw balance
    /// above 50, its complement at or below.
    #[test]
    fn framing_percentage_matches_balance(balance in 0u8..=100, seed in 0u64..200) {
        let draft = draft(balance, 50);
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        if balance > 50 {
            let needle = format!("{}% logically", balance);
            prop_assert!(result.recommendation.contains(&needle));
        } else {
            let needle = format!("{}% emotionally", 100 - balance);
            prop_assert!(result.recommendation.contains(&needle));
        }
    }

    /// Exactly one framing sentence appears, never both.
    #[test]
    fn framing_branches_are_exclusive(balance in 0u8..=100, seed in 0u64..50) {
        let draft = draft(balance, 50);
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);
        prop_assert_ne!(
            result.recommendation.contains("% logically"),
            result.recommendation.contains("% emotionally")
        );
    }

    /// The first option's compass position stays inside the inner band
    /// whatever the sliders say.
    #[test]
    fn first_option_position_clamps(
        balance in 0u8..=100,
        horizon in 0u8..=100,
        seed in 0u64..200,
    ) {
        let mut draft = draft(balance, horizon);
        draft.options[0] = "Go".to_string();
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let pos = result.option_positions.get("Go").unwrap();
        prop_assert!((15..=85).contains(&pos.x.value()));
        prop_assert!((15..=85).contains(&pos.y.value()));
    }

    /// The second option lands in the quadrant opposite the first, per axis.
    #[test]
    fn second_option_opposes_first(
        balance in 0u8..=100,
        horizon in 0u8..=100,
        seed in 0u64..200,
    ) {
        let mut draft = draft(balance, horizon);
        draft.options = ["A".to_string(), "B".to_string()];
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let a = result.option_positions.get("A").unwrap();
        let b = result.option_positions.get("B").unwrap();
        for (ref_axis, opp_axis) in [(a.x, b.x), (a.y, b.y)] {
            if ref_axis.value() > 50 {
                prop_assert!((10..=45).contains(&opp_axis.value()));
            } else {
                prop_assert!((55..=90).contains(&opp_axis.value()));
            }
        }
    }

    /// Factor count is structural: one per selected value, three fixed,
    /// plus one when stakes are present.
    #[test]
    fn factor_count_is_structural(
        values in value_subset(),
        stakes in proptest::option::of("[a-z]{1,12}"),
        seed in 0u64..100,
    ) {
        let mut draft = draft(60, 50);
        draft.values = values.clone();
        if let Some(s) = &stakes {
            draft.stakes = s.clone();
        }
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let expected = values.len() + 3 + usize::from(stakes.is_some());
        prop_assert_eq!(result.factors.len(), expected);

        for (factor, value) in result.factors.iter().zip(&values) {
            prop_assert!((60..=99).contains(&factor.score.value()));
            prop_assert_eq!(factor.value_alignment, Some(*value));
        }
    }

    /// Loss aversion fires exactly when the financial score exceeds 70
    /// while the balance slider sits below 40.
    #[test]
    fn loss_aversion_tracks_its_rule(balance in 0u8..=100, seed in 0u64..200) {
        let draft = draft(balance, 50);
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let financial = result.factor_score(FACTOR_FINANCIAL).unwrap().value();
        let expected = financial > 70 && balance < 40;
        prop_assert_eq!(result.has_bias(BiasType::LossAversion), expected);
    }

    /// Emotional reasoning fires exactly when the emotional score exceeds
    /// 80 while the balance slider sits below 30.
    #[test]
    fn emotional_reasoning_tracks_its_rule(balance in 0u8..=100, seed in 0u64..200) {
        let draft = draft(balance, 50);
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let emotional = result.factor_score(FACTOR_EMOTIONAL).unwrap().value();
        let expected = emotional > 80 && balance < 30;
        prop_assert_eq!(result.has_bias(BiasType::EmotionalReasoning), expected);
    }

    /// Status quo keys off the first option slot alone, case-insensitively.
    #[test]
    fn status_quo_reads_only_the_first_slot(
        first in "[A-Za-z ]{0,20}",
        second in "[A-Za-z ]{0,20}",
        seed in 0u64..50,
    ) {
        let mut draft = draft(60, 50);
        draft.options = [first.clone(), second];
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let lowered = first.to_lowercase();
        let expected = lowered.contains("stay") || lowered.contains("current");
        prop_assert_eq!(result.has_bias(BiasType::StatusQuo), expected);
    }

    /// Sentiment magnitudes land in their documented ranges and the tone
    /// follows the positive-then-negative priority.
    #[test]
    fn sentiment_ranges_and_tone_priority(seed in 0u64..500) {
        let draft = draft(60, 50);
        let mut rng = SeededSource::new(seed);
        let result = AnalysisGenerator::generate(&draft, &mut rng);

        let s = &result.sentiment;
        prop_assert!((0.3..1.0).contains(&s.positive));
        prop_assert!((0.0..0.3).contains(&s.negative));
        prop_assert!((0.0..0.2).contains(&s.neutral));

        let label = s.tone.label();
        if s.positive > 0.6 {
            prop_assert_eq!(label, "Growth-Oriented");
        } else if s.negative > 0.2 {
            prop_assert_eq!(label, "High Tension");
        } else {
            prop_assert_eq!(label, "Mostly Neutral with Slight Positivity");
        }
    }
}
