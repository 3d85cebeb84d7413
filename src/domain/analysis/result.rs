//! The generated analysis bundle and its parts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::decision::CoreValue;
use crate::domain::foundation::Percentage;

use super::biases::DetectedBias;

/// A scored factor contributing to the recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Display name, e.g. "Financial impact" or "Family alignment".
    pub name: String,
    /// Heuristic score in [0,100].
    pub score: Percentage,
    /// The selected value this factor reflects, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_alignment: Option<CoreValue>,
}

impl Factor {
    /// Creates a plain factor with no value alignment.
    pub fn new(name: impl Into<String>, score: u8) -> Self {
        Self {
            name: name.into(),
            score: Percentage::new(score),
            value_alignment: None,
        }
    }

    /// Creates a factor aligned to a selected value.
    pub fn aligned(name: impl Into<String>, score: u8, value: CoreValue) -> Self {
        Self {
            name: name.into(),
            score: Percentage::new(score),
            value_alignment: Some(value),
        }
    }
}

/// Overall tone label derived from the sentiment magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    GrowthOriented,
    HighTension,
    MostlyNeutral,
}

impl Tone {
    /// Returns the display label for this tone.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::GrowthOriented => "Growth-Oriented",
            Tone::HighTension => "High Tension",
            Tone::MostlyNeutral => "Mostly Neutral with Slight Positivity",
        }
    }
}

/// Sampled sentiment magnitudes. Independent; not required to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub tone: Tone,
}

impl Sentiment {
    /// Builds a sentiment breakdown, deriving the tone label.
    ///
    /// Tone priority: Growth-Oriented if positive > 0.6, otherwise
    /// High Tension if negative > 0.2, otherwise neutral.
    pub fn from_magnitudes(positive: f64, negative: f64, neutral: f64) -> Self {
        let tone = if positive > 0.6 {
            Tone::GrowthOriented
        } else if negative > 0.2 {
            Tone::HighTension
        } else {
            Tone::MostlyNeutral
        };
        Self {
            positive,
            negative,
            neutral,
            tone,
        }
    }
}

/// A point on the 2D decision compass.
///
/// X runs emotional (0) to logical (100); Y runs short-term (0) to
/// long-term (100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassPosition {
    pub x: Percentage,
    pub y: Percentage,
}

impl CompassPosition {
    pub fn new(x: u8, y: u8) -> Self {
        Self {
            x: Percentage::new(x),
            y: Percentage::new(y),
        }
    }
}

/// The full generated analysis, replaced wholesale on each submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Composed narrative recommendation.
    pub recommendation: String,
    /// Value-alignment factors, the three fixed factors, and the optional
    /// stakes factor, in that order.
    pub factors: Vec<Factor>,
    /// Sampled sentiment breakdown.
    pub sentiment: Sentiment,
    /// Biases whose detection rules fired, in catalog order.
    pub detected_biases: Vec<DetectedBias>,
    /// Present only when two or more values were selected.
    pub value_conflicts: Vec<String>,
    /// One compass position per non-empty option; duplicate option text
    /// collapses to a single key.
    pub option_positions: HashMap<String, CompassPosition>,
    /// Synthesized hybrid suggestion, sometimes present when both options
    /// were provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_option: Option<String>,
}

impl AnalysisResult {
    /// Looks up a factor score by display name.
    pub fn factor_score(&self, name: &str) -> Option<Percentage> {
        self.factors.iter().find(|f| f.name == name).map(|f| f.score)
    }

    /// True if the given bias fired.
    pub fn has_bias(&self, bias_type: super::biases::BiasType) -> bool {
        self.detected_biases.iter().any(|b| b.bias_type == bias_type)
    }
}
