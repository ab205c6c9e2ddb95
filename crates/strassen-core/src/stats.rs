//! Atomic multiplication statistics for lock-free tracking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of multiplication statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplyStats {
    /// Recursive multiply invocations, including the top-level call.
    pub calls: u64,
    /// Scalar products computed at the 1x1 base case.
    pub scalar_multiplications: u64,
    /// Sub-problems handed to the naive product at the leaf size.
    pub leaf_products: u64,
    /// Deepest recursion level reached (the top level is 0).
    pub max_depth: u64,
}

/// Atomic statistics updated from any worker thread.
#[derive(Debug)]
pub struct AtomicMultiplyStats {
    calls: AtomicU64,
    scalar_multiplications: AtomicU64,
    leaf_products: AtomicU64,
    max_depth: AtomicU64,
}

impl AtomicMultiplyStats {
    /// Create new zeroed stats.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            scalar_multiplications: AtomicU64::new(0),
            leaf_products: AtomicU64::new(0),
            max_depth: AtomicU64::new(0),
        }
    }

    /// Take a snapshot of current stats.
    #[must_use]
    pub fn snapshot(&self) -> MultiplyStats {
        MultiplyStats {
            calls: self.calls.load(Ordering::Relaxed),
            scalar_multiplications: self.scalar_multiplications.load(Ordering::Relaxed),
            leaf_products: self.leaf_products.load(Ordering::Relaxed),
            max_depth: self.max_depth.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.scalar_multiplications.store(0, Ordering::Relaxed);
        self.leaf_products.store(0, Ordering::Relaxed);
        self.max_depth.store(0, Ordering::Relaxed);
    }

    /// Record a multiply invocation at recursion `depth`.
    pub fn record_call(&self, depth: u64) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.max_depth.fetch_max(depth, Ordering::Relaxed);
    }

    /// Increment the base-case counter.
    pub fn record_scalar(&self) {
        self.scalar_multiplications.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the naive-leaf counter.
    pub fn record_leaf(&self) {
        self.leaf_products.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for AtomicMultiplyStats {
    fn default() -> Self {
        Self::new()
    }
}
