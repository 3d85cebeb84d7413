//! Reflection delay adapters.

use async_trait::async_trait;
use std::time::Duration;

use crate::ports::ReflectionDelay;

/// Real pause backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioDelay;

impl TokioDelay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReflectionDelay for TokioDelay {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// No-op delay for tests and non-interactive runs.
#[derive(Debug, Default)]
pub struct NoDelay;

impl NoDelay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReflectionDelay for NoDelay {
    async fn pause(&self, _duration: Duration) {}
}
