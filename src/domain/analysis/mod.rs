//! Analysis domain - the heuristic generator and its result types.

mod biases;
mod generator;
mod result;

pub use biases::{
    catalog_entry, detect_biases, BiasCatalogEntry, BiasType, DetectedBias, BIAS_CATALOG,
};
pub use generator::{
    AnalysisGenerator, FACTOR_EMOTIONAL, FACTOR_FINANCIAL, FACTOR_LONG_TERM,
};
pub use result::{AnalysisResult, CompassPosition, Factor, Sentiment, Tone};
