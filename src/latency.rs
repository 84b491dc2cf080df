//! Artificial network latency applied by the client handles.

use tokio::time::sleep;
use tracing::trace;

use crate::config::LatencyConfig;

/// Latency class of an access-layer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
    Delete,
    StatusChange,
    Login,
}

/// Waits the configured delay for an operation before it reaches the store.
///
/// The wait is a plain `tokio::time::sleep`; once it elapses the request is
/// sent and runs to completion inside the owning actor.
#[derive(Debug, Clone, Default)]
pub struct Latency {
    config: LatencyConfig,
}

impl Latency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    pub fn none() -> Self {
        Self::new(LatencyConfig::instant())
    }

    pub async fn simulate(&self, operation: Operation) {
        let delay = self.config.duration_for(operation);
        if delay.is_zero() {
            return;
        }
        trace!(?operation, delay_ms = delay.as_millis() as u64, "Simulating latency");
        sleep(delay).await;
    }
}
