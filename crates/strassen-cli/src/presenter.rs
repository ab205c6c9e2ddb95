//! CLI result presenter.

use strassen_core::{Matrix, MultiplyStats};
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_duration, format_matrix, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    /// Show the two operands before the product.
    pub fn present_operands(&self, a: &Matrix<f64>, b: &Matrix<f64>) {
        if self.quiet {
            return;
        }
        println!("===== Matrices whose product needs to be computed =====");
        println!();
        println!("{}", format_matrix(a, self.verbose));
        println!("{}", format_matrix(b, self.verbose));
    }
}

/// Lines describing multiplier counters.
#[must_use]
pub fn stats_lines(stats: &MultiplyStats) -> Vec<String> {
    vec![
        format!("Recursive calls: {}", format_number(stats.calls)),
        format!(
            "Scalar multiplications: {}",
            format_number(stats.scalar_multiplications)
        ),
        format!("Naive leaf products: {}", format_number(stats.leaf_products)),
        format!("Max recursion depth: {}", stats.max_depth),
    ]
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &MultiplicationResult, product: &Matrix<f64>) {
        if self.quiet {
            print!("{}", format_matrix(product, self.verbose));
            return;
        }

        println!("===== Product computed with {} =====", result.algorithm);
        println!();

        if self.details {
            println!("Dimension: {}", product.shape());
            println!("Duration: {}", format_duration(result.duration));
        }
        if self.verbose {
            if let Some(stats) = &result.stats {
                for line in stats_lines(stats) {
                    println!("{line}");
                }
            }
        }
        if self.details || self.verbose {
            println!();
        }

        print!("{}", format_matrix(product, self.verbose));
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) => format!("ERROR: {e}"),
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
