//! Adapters - Implementations of the ports.

pub mod delay;
pub mod random;

pub use delay::{NoDelay, TokioDelay};
pub use random::{ScriptedSource, SeededSource, ThreadRngSource};
