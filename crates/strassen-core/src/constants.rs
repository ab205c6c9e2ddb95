//! Constants for multiplication thresholds and configuration.

/// Default dimension at or below which sub-problems use the naive product.
///
/// A value of 1 means the recursion always bottoms out at the scalar case.
pub const DEFAULT_LEAF_SIZE: usize = 1;

/// Default dimension at or above which the seven products run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Number of recursive products per Strassen level.
pub const STRASSEN_PRODUCTS: u64 = 7;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Default absolute tolerance when cross-validating floating-point results.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Process exit codes used by the `strassen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Multiplier results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Operands violated a shape precondition.
    pub const ERROR_SHAPE: i32 = 5;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_sane() {
        assert!(DEFAULT_LEAF_SIZE >= 1);
        assert!(DEFAULT_PARALLEL_THRESHOLD.is_power_of_two());
        assert!(DEFAULT_PARALLEL_THRESHOLD > DEFAULT_LEAF_SIZE);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_TIMEOUT,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_SHAPE,
            exit_codes::ERROR_CANCELED,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
