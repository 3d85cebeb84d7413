//! Cognitive bias catalog and detection rules.
//!
//! The catalog is fixed, immutable data built once at first use. Three of
//! the five entries have active detection rules; the remaining two are
//! catalog-only and can still be surfaced in the bias-detail view.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// The fixed set of catalogued cognitive biases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    LossAversion,
    EmotionalReasoning,
    StatusQuo,
    Confirmation,
    SunkCost,
}

impl BiasType {
    /// All catalogued biases, in catalog order.
    pub const ALL: [BiasType; 5] = [
        BiasType::LossAversion,
        BiasType::EmotionalReasoning,
        BiasType::StatusQuo,
        BiasType::Confirmation,
        BiasType::SunkCost,
    ];

    /// Returns the display label for this bias.
    pub fn label(&self) -> &'static str {
        match self {
            BiasType::LossAversion => "Loss Aversion",
            BiasType::EmotionalReasoning => "Emotional Reasoning",
            BiasType::StatusQuo => "Status Quo Bias",
            BiasType::Confirmation => "Confirmation Bias",
            BiasType::SunkCost => "Sunk Cost Fallacy",
        }
    }
}

impl fmt::Display for BiasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One catalog entry: what the bias is and what to do about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasCatalogEntry {
    pub bias_type: BiasType,
    pub description: &'static str,
    pub suggestion: &'static str,
}

/// The full five-entry catalog, in fixed order.
pub static BIAS_CATALOG: Lazy<Vec<BiasCatalogEntry>> = Lazy::new(|| {
    vec![
        BiasCatalogEntry {
            bias_type: BiasType::LossAversion,
            description: "You may be weighing potential losses more heavily than \
                equivalent gains.",
            suggestion: "Reframe the choice: if you already had the other option, \
                would you switch to keep what you have now?",
        },
        BiasCatalogEntry {
            bias_type: BiasType::EmotionalReasoning,
            description: "Strong feelings may be standing in for evidence about \
                how things actually are.",
            suggestion: "Write down the facts you would cite to a neutral friend, \
                separately from how the situation feels.",
        },
        BiasCatalogEntry {
            bias_type: BiasType::StatusQuo,
            description: "Keeping things as they are may feel safer than it \
                really is.",
            suggestion: "Imagine you were choosing fresh today with no history: \
                would you pick your current situation?",
        },
        BiasCatalogEntry {
            bias_type: BiasType::Confirmation,
            description: "It is easy to notice only the evidence that supports \
                the option you already prefer.",
            suggestion: "Spend five minutes arguing honestly for the option you \
                like least.",
        },
        BiasCatalogEntry {
            bias_type: BiasType::SunkCost,
            description: "Past investment of time or money may be pulling you \
                toward an option it no longer justifies.",
            suggestion: "Ignore what you have already spent; compare only what \
                each path costs and returns from today forward.",
        },
    ]
});

/// Looks up a catalog entry by bias type.
pub fn catalog_entry(bias_type: BiasType) -> &'static BiasCatalogEntry {
    BIAS_CATALOG
        .iter()
        .find(|e| e.bias_type == bias_type)
        .expect("every BiasType has a catalog entry")
}

/// A bias whose detection rule fired for this submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedBias {
    pub bias_type: BiasType,
    pub description: String,
    pub suggestion: String,
}

impl DetectedBias {
    fn from_catalog(bias_type: BiasType) -> Self {
        let entry = catalog_entry(bias_type);
        Self {
            bias_type,
            description: entry.description.to_string(),
            suggestion: entry.suggestion.to_string(),
        }
    }
}

/// Balance-score ceiling for the Loss Aversion rule.
const LOSS_AVERSION_BALANCE_BELOW: u8 = 40;
/// Financial-factor floor for the Loss Aversion rule.
const LOSS_AVERSION_FINANCIAL_ABOVE: u8 = 70;
/// Balance-score ceiling for the Emotional Reasoning rule.
const EMOTIONAL_REASONING_BALANCE_BELOW: u8 = 30;
/// Emotional-factor floor for the Emotional Reasoning rule.
const EMOTIONAL_REASONING_WELLBEING_ABOVE: u8 = 80;

/// Runs the detection rules, in fixed order, each independent of the rest.
///
/// Only the first option slot is checked for status-quo wording; an option
/// like "stay put" in slot 1 does not fire the rule. Any subset of rules
/// may match.
pub fn detect_biases(
    balance_score: Percentage,
    financial_impact: Percentage,
    emotional_wellbeing: Percentage,
    first_option: &str,
) -> Vec<DetectedBias> {
    let mut detected = Vec::new();

    if financial_impact.value() > LOSS_AVERSION_FINANCIAL_ABOVE
        && balance_score.value() < LOSS_AVERSION_BALANCE_BELOW
    {
        detected.push(DetectedBias::from_catalog(BiasType::LossAversion));
    }

    if balance_score.value() < EMOTIONAL_REASONING_BALANCE_BELOW
        && emotional_wellbeing.value() > EMOTIONAL_REASONING_WELLBEING_ABOVE
    {
        detected.push(DetectedBias::from_catalog(BiasType::EmotionalReasoning));
    }

    let first_lowered = first_option.to_lowercase();
    if first_lowered.contains("stay") || first_lowered.contains("current") {
        detected.push(DetectedBias::from_catalog(BiasType::StatusQuo));
    }

    detected
}
