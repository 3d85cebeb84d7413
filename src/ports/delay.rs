//! Reflection-delay port for the submission step.
//!
//! Submission deliberately pauses before revealing the analysis. This is
//! the single suspend point in the system; there is no cancellation, and
//! re-submission during the pause is prevented by the session, not here.

use async_trait::async_trait;
use std::time::Duration;

/// Port for the artificial pause before an analysis is revealed.
#[async_trait]
pub trait ReflectionDelay: Send + Sync {
    /// Suspends for the given duration.
    async fn pause(&self, duration: Duration);
}
