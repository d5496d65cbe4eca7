//! Request counters, flushed once at shutdown.
//!
//! Counting needs no startup, so this component registers as a stopper only
//! — the orchestrator still guarantees it outlives the server that feeds it.

use async_trait::async_trait;
use lifecycle_framework::{BoxError, Stoppable};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Default)]
pub struct MetricsFlusher {
    requests: AtomicU64,
}

impl MetricsFlusher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Stoppable for MetricsFlusher {
    async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        info!(requests = self.requests(), "metrics flushed");
        Ok(())
    }
}
