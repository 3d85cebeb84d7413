//! The fixed catalog of selectable personal values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of values a user may select for one decision.
pub const MAX_SELECTED_VALUES: usize = 3;

/// A personal value the user can weigh the decision against.
///
/// The catalog and its order are fixed; users pick up to
/// [`MAX_SELECTED_VALUES`] of them and selection order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreValue {
    Family,
    Career,
    Health,
    FinancialSecurity,
    PersonalGrowth,
    Relationships,
    Freedom,
    Stability,
    Creativity,
    Adventure,
}

impl CoreValue {
    /// The full catalog in display order.
    pub const ALL: [CoreValue; 10] = [
        CoreValue::Family,
        CoreValue::Career,
        CoreValue::Health,
        CoreValue::FinancialSecurity,
        CoreValue::PersonalGrowth,
        CoreValue::Relationships,
        CoreValue::Freedom,
        CoreValue::Stability,
        CoreValue::Creativity,
        CoreValue::Adventure,
    ];

    /// Returns the display label for this value.
    pub fn label(&self) -> &'static str {
        match self {
            CoreValue::Family => "Family",
            CoreValue::Career => "Career",
            CoreValue::Health => "Health",
            CoreValue::FinancialSecurity => "Financial security",
            CoreValue::PersonalGrowth => "Personal growth",
            CoreValue::Relationships => "Relationships",
            CoreValue::Freedom => "Freedom",
            CoreValue::Stability => "Stability",
            CoreValue::Creativity => "Creativity",
            CoreValue::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for CoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
