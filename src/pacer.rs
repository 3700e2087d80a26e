use std::time::Duration;
use tracing::debug;


/// Fixed delay between lookups; no jitter and no backoff.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }

        debug!(interval_ms = self.interval.as_millis() as u64, "Pausing before next lookup");

        tokio::time::sleep(self.interval).await;
    }
}
