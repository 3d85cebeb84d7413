//! Domain layer - pure model and logic, no I/O.

pub mod analysis;
pub mod decision;
pub mod foundation;
