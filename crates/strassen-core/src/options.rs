//! Multiplication options and configuration.

use crate::constants::{DEFAULT_LEAF_SIZE, DEFAULT_PARALLEL_THRESHOLD};

/// Options for Strassen multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Dimension at or below which sub-problems use the naive product.
    pub leaf_size: usize,
    /// Evaluate the seven products of a level concurrently.
    pub parallel: bool,
    /// Smallest dimension at which a level is evaluated in parallel.
    pub parallel_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF_SIZE,
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.leaf_size == 0 {
            self.leaf_size = DEFAULT_LEAF_SIZE;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        // A 1x1 level has nothing to split.
        self.parallel_threshold = self.parallel_threshold.max(2);
        self
    }

    /// Enable or disable parallel evaluation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
