//! Decision Compass - Guided Decision Questionnaire
//!
//! This crate implements a single-session guided questionnaire: a user
//! states a decision question, records a gut reaction, supplies options,
//! stakes, and values, and receives a heuristically generated analysis
//! with scored factors, sentiment, bias flags, and a 2D option compass.
//! All analysis is produced by local randomized heuristics; there is no
//! network, no persistence, and no learned model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
