//! Observer pattern for progress tracking.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
///
/// Observers are shared with rayon workers, so updates may arrive from any
/// thread and out of order.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Counts completed units of work and forwards updates to an observer.
pub(crate) struct ProgressTracker<'a> {
    observer: &'a dyn ProgressObserver,
    algorithm: &'static str,
    completed: AtomicU64,
    total: u64,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(observer: &'a dyn ProgressObserver, algorithm: &'static str, total: u64) -> Self {
        Self {
            observer,
            algorithm,
            completed: AtomicU64::new(0),
            total,
        }
    }

    /// Record one finished unit and notify the observer.
    pub(crate) fn advance(&self) {
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        self.observer
            .on_progress(&ProgressUpdate::new(self.algorithm, completed, self.total));
    }

    /// Send the final update.
    pub(crate) fn finish(&self) {
        self.observer.on_progress(&ProgressUpdate::done(self.algorithm));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<ProgressUpdate>>);

    impl ProgressObserver for Recording {
        fn on_progress(&self, update: &ProgressUpdate) {
            self.0.lock().push(update.clone());
        }
    }

    #[test]
    fn tracker_counts_and_finishes() {
        let rec = Recording::default();
        let tracker = ProgressTracker::new(&rec, "Strassen", 7);
        for _ in 0..7 {
            tracker.advance();
        }
        tracker.finish();

        let updates = rec.0.lock();
        assert_eq!(updates.len(), 8);
        assert_eq!(updates[0].completed, 1);
        assert_eq!(updates[6].completed, 7);
        assert!((updates[6].progress - 1.0).abs() < f64::EPSILON);
        assert!(updates[7].done);
    }
}
