//! Random source adapters.
//!
//! `ThreadRngSource` backs production use, `SeededSource` gives
//! reproducible runs, and `ScriptedSource` replays an exact sequence of
//! draws so tests can force any generator branch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use crate::ports::RandomSource;

/// Production source backed by the thread-local rand generator.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible source seeded from a u64.
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Test source replaying a fixed queue of unit-interval draws.
///
/// Panics when the queue runs dry, which makes a test that consumes more
/// draws than it scripted fail loudly instead of drifting.
#[derive(Debug)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws: draws.into(),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        self.draws
            .pop_front()
            .expect("ScriptedSource ran out of draws")
    }
}
