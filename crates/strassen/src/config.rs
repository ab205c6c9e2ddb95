//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use strassen_core::{MatrixError, Options};

/// Strassen-rs: multiply square matrices with Strassen's algorithm.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Dimension of the generated demo matrices.
    #[arg(short = 'n', long, default_value = "4", env = "STRASSEN_SIZE")]
    pub size: usize,

    /// Initializer for the generated demo matrices.
    #[arg(long, value_enum, default_value_t = Fill::IndexSum)]
    pub fill: Fill,

    /// JSON file with operands `{"a": [[..]], "b": [[..]]}`; overrides --size and --fill.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Algorithm to use: strassen, parallel, naive, or all.
    #[arg(long, default_value = "strassen")]
    pub algo: String,

    /// Dimension at or below which the naive product takes over (0 = default).
    #[arg(long, default_value = "0")]
    pub leaf_size: usize,

    /// Smallest dimension evaluated in parallel (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Timeout duration (e.g., "500ms", "30s", "5m", "1h").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Write the product to this file as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the product as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Verbose output (operands, full matrices, counters).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show dimension and timings.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Initializer for generated operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fill {
    /// Element `(i, j)` is `i + j`.
    IndexSum,
    /// Identity matrix.
    Identity,
    /// Every element is one.
    Ones,
    /// Elements `1, 2, 3, ..` in row-major order.
    Sequential,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout flag.
    pub fn timeout_duration(&self) -> Result<Duration, MatrixError> {
        parse_duration(&self.timeout)
            .ok_or_else(|| MatrixError::Config(format!("invalid timeout: {:?}", self.timeout)))
    }

    /// Multiplier options derived from the flags, with zeros replaced by defaults.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            leaf_size: self.leaf_size,
            parallel: false,
            parallel_threshold: self.parallel_threshold,
        }
        .normalize()
    }
}

/// Parse a duration string like "500ms", "30s", "5m", "1h" or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_args(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("strassen").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = parse_args(&[]);
        assert_eq!(config.fill, Fill::IndexSum);
        assert_eq!(config.algo, "strassen");
        assert_eq!(config.timeout_duration(), Ok(Duration::from_secs(300)));
        assert_eq!(config.options(), Options::default());
        assert!(config.input.is_none());
        assert!(!config.json);
    }

    #[test]
    fn flags() {
        let config = parse_args(&[
            "-n",
            "8",
            "--fill",
            "sequential",
            "--algo",
            "all",
            "--leaf-size",
            "2",
            "--parallel-threshold",
            "16",
            "--timeout",
            "30s",
            "-q",
        ]);
        assert_eq!(config.size, 8);
        assert_eq!(config.fill, Fill::Sequential);
        assert_eq!(config.algo, "all");
        assert_eq!(config.options().leaf_size, 2);
        assert_eq!(config.options().parallel_threshold, 16);
        assert_eq!(config.timeout_duration(), Ok(Duration::from_secs(30)));
        assert!(config.quiet);
    }

    #[test]
    fn invalid_fill_rejected() {
        assert!(AppConfig::try_parse_from(["strassen", "--fill", "random"]).is_err());
    }

    #[test]
    fn invalid_timeout_is_config_error() {
        let config = parse_args(&["--timeout", "soon"]);
        assert!(matches!(
            config.timeout_duration(),
            Err(MatrixError::Config(_))
        ));
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("45"), Some(Duration::from_secs(45)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("1ms"), Some(Duration::from_millis(1)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration("-5s"), None);
    }
}
