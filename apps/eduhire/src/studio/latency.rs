use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

/// One suspend-then-resume point: waits `delay`, then resolves the step.
/// There is no cancellation or timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub async fn run<T>(&self, step: impl FnOnce() -> T) -> T {
        if !self.delay.is_zero() {
            debug!("Simulating {:?} of latency", self.delay);
            sleep(self.delay).await;
        }
        step()
    }
}
