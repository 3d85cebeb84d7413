//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Uniform random draws for the analysis generator
//! - `ReflectionDelay` - The artificial pause before revealing an analysis

mod delay;
mod random_source;

pub use delay::ReflectionDelay;
pub use random_source::RandomSource;
