//! Randomness port for the analysis generator.
//!
//! All random draws in the generator flow through this trait so that tests
//! can substitute seeded or scripted sources and force any branch. The
//! derived helpers are defined in terms of `next_f64`, which keeps scripted
//! sources to a single queue of unit-interval draws.

/// Source of uniform random draws.
pub trait RandomSource: Send {
    /// Returns the next draw, uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniform integer in `[min, max]` inclusive.
    ///
    /// `min` must not exceed `max`.
    fn int_between(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        let drawn = min + (self.next_f64() * span) as i64;
        drawn.min(max)
    }

    /// Returns a uniform index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.int_between(0, len as i64 - 1) as usize
    }

    /// Returns true with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}
