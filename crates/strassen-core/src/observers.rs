//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that logs progress updates through `tracing`.
///
/// Updates closer than `min_delta` to the last logged one are dropped;
/// completion updates are always logged.
pub struct LoggingObserver {
    last_reported: AtomicU64,
    min_delta: f64,
}

impl LoggingObserver {
    /// Create a logging observer with the default reporting threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(PROGRESS_REPORT_THRESHOLD)
    }

    /// Create a logging observer that logs at most every `min_delta` of progress.
    #[must_use]
    pub fn with_threshold(min_delta: f64) -> Self {
        Self {
            last_reported: AtomicU64::new(0f64.to_bits()),
            min_delta,
        }
    }

    fn should_report(&self, update: &ProgressUpdate) -> bool {
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        update.done || (update.progress - last) >= self.min_delta
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if !self.should_report(update) {
            return;
        }
        if update.done {
            info!(algorithm = %update.algorithm, "Multiplication complete");
        } else {
            debug!(
                algorithm = %update.algorithm,
                progress = format!("{:.1}%", update.progress * 100.0),
                completed = update.completed,
                total = update.total,
                "Progress update"
            );
        }
        self.last_reported
            .store(update.progress.to_bits(), Ordering::Relaxed);
    }
}

/// Null object pattern: discards progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
