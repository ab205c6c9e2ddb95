//! Operand construction: generated demo matrices or a JSON input file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strassen_core::{Matrix, MatrixError};
use thiserror::Error;

use crate::config::{AppConfig, Fill};

/// Errors raised while building the operands.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid operand JSON.
    #[error("invalid operand JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The operands are not valid matrices.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

#[derive(Debug, Deserialize)]
struct OperandFile {
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
}

/// Build the two operands from the configuration.
pub fn load_operands(config: &AppConfig) -> Result<(Matrix<f64>, Matrix<f64>), InputError> {
    match &config.input {
        Some(path) => read_operands(path),
        None => {
            let m = generate(config.fill, config.size)?;
            Ok((m.clone(), m))
        }
    }
}

/// Read `{"a": [[..]], "b": [[..]]}` from `path`.
pub fn read_operands(path: &Path) -> Result<(Matrix<f64>, Matrix<f64>), InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_operands(&text).map_err(|e| match e {
        ParseFailure::Json(source) => InputError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Matrix(e) => InputError::Matrix(e),
    })
}

enum ParseFailure {
    Json(serde_json::Error),
    Matrix(MatrixError),
}

fn parse_operands(text: &str) -> Result<(Matrix<f64>, Matrix<f64>), ParseFailure> {
    let file: OperandFile = serde_json::from_str(text).map_err(ParseFailure::Json)?;
    let a = Matrix::from_rows(&file.a).map_err(ParseFailure::Matrix)?;
    let b = Matrix::from_rows(&file.b).map_err(ParseFailure::Matrix)?;
    Ok((a, b))
}

/// Generate an `n × n` demo matrix.
#[allow(clippy::cast_precision_loss)]
pub fn generate(fill: Fill, n: usize) -> Result<Matrix<f64>, MatrixError> {
    match fill {
        Fill::IndexSum => Matrix::from_fn(n, n, |i, j| (i + j) as f64),
        Fill::Identity => Matrix::identity(n),
        Fill::Ones => Matrix::from_fn(n, n, |_, _| 1.0),
        Fill::Sequential => Matrix::from_fn(n, n, |i, j| (i * n + j + 1) as f64),
    }
}
