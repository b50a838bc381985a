//! Observability stubs (metrics, tracing)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording operation counters
#[derive(Debug, Default)]
pub struct Metrics {
    ops_committed: AtomicU64,
    loans_issued: AtomicU64,
    saves_failed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn op_committed(&self) {
        self.ops_committed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "ops_committed", "Metric incremented");
    }

    pub fn loan_issued(&self) {
        self.loans_issued.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "loans_issued", "Metric incremented");
    }

    pub fn save_failed(&self) {
        self.saves_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "saves_failed", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            ops_committed: self.ops_committed.load(Ordering::Relaxed),
            loans_issued: self.loans_issued.load(Ordering::Relaxed),
            saves_failed: self.saves_failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub ops_committed: u64,
    pub loans_issued: u64,
    pub saves_failed: u64,
}
