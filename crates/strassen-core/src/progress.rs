//! Progress tracking types and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::MatrixError;

/// Progress update sent from multipliers to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Name of the multiplier producing this update.
    pub algorithm: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Completed units of work (top-level products, or rows for naive).
    pub completed: u64,
    /// Total units of work.
    pub total: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update for `completed` out of `total` units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(algorithm: &'static str, completed: u64, total: u64) -> Self {
        let progress = if total == 0 {
            1.0
        } else {
            completed as f64 / total as f64
        };
        Self {
            algorithm,
            progress,
            completed,
            total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            progress: 1.0,
            completed: 0,
            total: 0,
            done: true,
        }
    }
}

/// Cooperative cancellation token with an optional deadline.
///
/// Clones share the cancellation flag, so a handler holding one clone can
/// stop a computation holding another. An expired deadline reports the
/// configured timeout.
///
/// # Example
/// ```
/// use strassen_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
    timeout: Option<Duration>,
}

impl CancellationToken {
    /// Create a new cancellation token without a deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
            timeout: None,
        }
    }

    /// Create a token that also expires once `timeout` has elapsed.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
            timeout: Some(timeout),
        }
    }

    /// Check if cancellation has been requested or the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.is_expired()
    }

    fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled or expired.
    ///
    /// Use this as a checkpoint before each unit of work:
    /// ```
    /// use strassen_core::progress::CancellationToken;
    /// use strassen_core::MatrixError;
    ///
    /// let token = CancellationToken::new();
    /// assert!(token.check_cancelled().is_ok());
    ///
    /// token.cancel();
    /// assert_eq!(token.check_cancelled(), Err(MatrixError::Cancelled));
    /// ```
    pub fn check_cancelled(&self) -> Result<(), MatrixError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(MatrixError::Cancelled);
        }
        if self.is_expired() {
            let limit = self.timeout.unwrap_or_default();
            return Err(MatrixError::Timeout(format!("{limit:?}")));
        }
        Ok(())
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
