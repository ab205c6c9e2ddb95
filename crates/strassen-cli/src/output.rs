//! CLI output formatting.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use strassen_core::Matrix;
use tracing::debug;

/// Rows and columns shown before a matrix is truncated in non-verbose mode.
pub const MAX_DISPLAY_DIM: usize = 16;

/// Format a matrix as right-aligned, space-separated rows.
///
/// Without `verbose`, matrices larger than [`MAX_DISPLAY_DIM`] in either
/// dimension are cut to their top-left corner with an ellipsis marker.
#[must_use]
pub fn format_matrix(m: &Matrix<f64>, verbose: bool) -> String {
    let (rows, cols) = if verbose {
        (m.rows(), m.cols())
    } else {
        (m.rows().min(MAX_DISPLAY_DIM), m.cols().min(MAX_DISPLAY_DIM))
    };

    let cells: Vec<Vec<String>> = (0..rows)
        .map(|i| m.row(i)[..cols].iter().map(|v| format_value(*v)).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in &cells {
        let line = row
            .iter()
            .map(|c| format!("{c:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        if cols < m.cols() {
            out.push_str(" ...");
        }
        out.push('\n');
    }
    if rows < m.rows() {
        let _ = writeln!(out, "... ({} more rows)", m.rows() - rows);
    }
    out
}

/// Format one element, dropping the fractional part of integral values.
#[must_use]
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        // Avoid printing "-0".
        "0".to_string()
    } else {
        format!("{v}")
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Write a matrix to `path` as `{"rows", "cols", "data"}` JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, m: &Matrix<f64>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, m)?;
    writeln!(writer)?;
    writer.flush()?;
    debug!(path = %path.display(), shape = %m.shape(), "Wrote product");
    Ok(())
}

/// Render a matrix as compact JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(m: &Matrix<f64>) -> serde_json::Result<String> {
    serde_json::to_string(m)
}
