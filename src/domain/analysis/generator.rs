//! Heuristic analysis generator.
//!
//! Pure function of a decision draft plus an injected [`RandomSource`];
//! given the same draft and the same draws it always produces the same
//! analysis.
//!
//! The order of random draws is fixed so scripted sources can steer every
//! branch:
//!
//! 1. one draw picking the named value, only on the logical branch with a
//!    non-empty selection;
//! 2. one draw per selected value (alignment score in [60,99]);
//! 3. three draws for the fixed factors (financial, emotional, long-term,
//!    each in [0,99]);
//! 4. one draw for the stakes factor if stakes were given;
//! 5. three draws for sentiment (positive, negative, neutral);
//! 6. two jitter draws for option 0's position, if present;
//! 7. two range draws for option 1's position, if present;
//! 8. one draw for the value-conflict coin, if two or more values;
//! 9. one draw for the third-option coin, if both options are present.

use crate::domain::decision::DecisionDraft;
use crate::domain::foundation::Percentage;
use crate::ports::RandomSource;

use super::biases::detect_biases;
use super::result::{AnalysisResult, CompassPosition, Factor, Sentiment};

/// Name of the fixed financial factor.
pub const FACTOR_FINANCIAL: &str = "Financial impact";
/// Name of the fixed emotional factor.
pub const FACTOR_EMOTIONAL: &str = "Emotional well-being";
/// Name of the fixed long-term factor.
pub const FACTOR_LONG_TERM: &str = "Long-term consequences";

/// Probability of surfacing a value conflict when two or more values
/// are selected.
const VALUE_CONFLICT_PROBABILITY: f64 = 0.5;
/// Probability of synthesizing a third option when both options are given.
const THIRD_OPTION_PROBABILITY: f64 = 0.3;

/// Jitter applied to option 0's compass position, per axis.
const POSITION_JITTER: i64 = 10;
/// Clamp range for option 0's jittered position.
const POSITION_MIN: i64 = 15;
const POSITION_MAX: i64 = 85;

/// Generates the heuristic analysis bundle.
pub struct AnalysisGenerator;

impl AnalysisGenerator {
    /// Runs the full seven-stage generation over the draft.
    pub fn generate(draft: &DecisionDraft, rng: &mut dyn RandomSource) -> AnalysisResult {
        let recommendation = compose_recommendation(draft, rng);
        let factors = build_factors(draft, rng);

        let financial = score_of(&factors, FACTOR_FINANCIAL);
        let emotional = score_of(&factors, FACTOR_EMOTIONAL);
        let detected_biases = detect_biases(
            draft.balance_score,
            financial,
            emotional,
            &draft.options[0],
        );

        let sentiment = sample_sentiment(rng);
        let option_positions = place_options(draft, rng);
        let value_conflicts = surface_value_conflicts(draft, rng);
        let third_option = synthesize_third_option(draft, rng);

        AnalysisResult {
            recommendation,
            factors,
            sentiment,
            detected_biases,
            value_conflicts,
            option_positions,
            third_option,
        }
    }
}

fn score_of(factors: &[Factor], name: &str) -> Percentage {
    factors
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.score)
        .unwrap_or(Percentage::ZERO)
}

/// Stage 1: the narrative recommendation.
fn compose_recommendation(draft: &DecisionDraft, rng: &mut dyn RandomSource) -> String {
    let balance = draft.balance_score.value();
    let options = draft.filled_options();
    let both = options.len() == 2;

    let mut text = if balance > 50 {
        let mut text = format!(
            "You are weighing this decision {}% logically. Lead with the \
             evidence you can verify.",
            balance
        );
        if !draft.values.is_empty() {
            let picked = draft.values[rng.pick_index(draft.values.len())];
            text.push_str(&format!(
                " Notice how the choice sits with your commitment to {}.",
                picked.label()
            ));
        }
        if both {
            text.push_str(&format!(
                " Which of \"{}\" or \"{}\" holds up better once you lay the \
                 facts side by side?",
                options[0], options[1]
            ));
        } else {
            text.push_str(
                " Before you commit, check how each path would feel to live \
                 with, not just how it adds up.",
            );
        }
        text
    } else {
        let mut text = format!(
            "You are weighing this decision {}% emotionally. Honor that \
             signal; it usually knows something.",
            100 - balance
        );
        if draft.has_stakes() {
            text.push_str(&format!(
                " With {} at stake, balance the feeling against what you \
                 would actually be trading away.",
                draft.stakes.trim()
            ));
        }
        if both {
            text.push_str(&format!(
                " Try writing out the pros and cons of \"{}\" and \"{}\" \
                 before you decide.",
                options[0], options[1]
            ));
        } else {
            text.push_str(" Try writing out the pros and cons before you decide.");
        }
        text
    };

    text.push_str(&format!(
        "\n\nYour first instinct was: \"{}\". Keep that reaction in view as \
         the details pile up.",
        draft.initial_intuition
    ));

    if draft.time_horizon.value() > 50 {
        text.push_str(
            "\n\nYou are thinking long-term. Patience tends to pay here; \
             choose for the person you want to become.",
        );
    } else {
        text.push_str(
            "\n\nYou are focused on the near term. Make sure quick relief \
             does not cost you something lasting.",
        );
    }

    text
}

/// Stage 2: value-alignment factors, the three fixed factors, and the
/// conditional stakes factor, in that order.
fn build_factors(draft: &DecisionDraft, rng: &mut dyn RandomSource) -> Vec<Factor> {
    let mut factors = Vec::with_capacity(draft.values.len() + 4);

    for value in &draft.values {
        let score = rng.int_between(60, 99) as u8;
        factors.push(Factor::aligned(
            format!("{} alignment", value.label()),
            score,
            *value,
        ));
    }

    for name in [FACTOR_FINANCIAL, FACTOR_EMOTIONAL, FACTOR_LONG_TERM] {
        factors.push(Factor::new(name, rng.int_between(0, 99) as u8));
    }

    if draft.has_stakes() {
        factors.push(Factor::new(
            format!("Impact on {}", draft.stakes.trim()),
            rng.int_between(0, 99) as u8,
        ));
    }

    factors
}

/// Stage 4: three independent magnitudes plus the derived tone.
fn sample_sentiment(rng: &mut dyn RandomSource) -> Sentiment {
    let positive = 0.3 + rng.next_f64() * 0.7;
    let negative = rng.next_f64() * 0.3;
    let neutral = rng.next_f64() * 0.2;
    Sentiment::from_magnitudes(positive, negative, neutral)
}

/// Stage 5: compass positions, one per non-empty option.
///
/// Option 0 jitters around (balance, horizon) and clamps to [15,85].
/// Option 1 lands in the quadrant opposite option 0's resolved position:
/// per axis, [10,45] when option 0 sits above 50, otherwise [55,90]. When
/// only option 1 is filled the unjittered slider position stands in as the
/// reference. Identical option text collapses to one key.
fn place_options(
    draft: &DecisionDraft,
    rng: &mut dyn RandomSource,
) -> std::collections::HashMap<String, CompassPosition> {
    let mut positions = std::collections::HashMap::new();

    let base_x = draft.balance_score.value() as i64;
    let base_y = draft.time_horizon.value() as i64;
    let mut reference = (base_x, base_y);

    let first = draft.options[0].trim();
    if !first.is_empty() {
        let x = (base_x + rng.int_between(-POSITION_JITTER, POSITION_JITTER))
            .clamp(POSITION_MIN, POSITION_MAX);
        let y = (base_y + rng.int_between(-POSITION_JITTER, POSITION_JITTER))
            .clamp(POSITION_MIN, POSITION_MAX);
        reference = (x, y);
        positions.insert(first.to_string(), CompassPosition::new(x as u8, y as u8));
    }

    let second = draft.options[1].trim();
    if !second.is_empty() {
        let x = opposite_axis_draw(reference.0, rng);
        let y = opposite_axis_draw(reference.1, rng);
        positions.insert(second.to_string(), CompassPosition::new(x as u8, y as u8));
    }

    positions
}

fn opposite_axis_draw(reference: i64, rng: &mut dyn RandomSource) -> i64 {
    if reference > 50 {
        rng.int_between(10, 45)
    } else {
        rng.int_between(55, 90)
    }
}

/// Stage 6: occasionally name the first two selected values as in tension.
fn surface_value_conflicts(draft: &DecisionDraft, rng: &mut dyn RandomSource) -> Vec<String> {
    if draft.values.len() < 2 {
        return Vec::new();
    }
    if rng.chance(VALUE_CONFLICT_PROBABILITY) {
        vec![format!(
            "Your values of {} and {} appear to be in tension for this \
             decision. Name which one leads before you choose.",
            draft.values[0].label(),
            draft.values[1].label()
        )]
    } else {
        Vec::new()
    }
}

/// Stage 7: occasionally synthesize a hybrid of both options.
fn synthesize_third_option(draft: &DecisionDraft, rng: &mut dyn RandomSource) -> Option<String> {
    if !draft.has_both_options() {
        return None;
    }
    if rng.chance(THIRD_OPTION_PROBABILITY) {
        Some(format!(
            "There may be a third path: a hybrid that combines elements of \
             {} and {}.",
            draft.options[0].trim().to_lowercase(),
            draft.options[1].trim().to_lowercase()
        ))
    } else {
        None
    }
}
