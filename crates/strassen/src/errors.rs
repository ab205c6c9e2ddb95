//! Error handling and exit codes.

use strassen_core::exit_codes;
use strassen_core::MatrixError;

use crate::input::InputError;

/// Map a matrix error to its process exit code.
pub fn exit_code(err: &MatrixError) -> i32 {
    match err {
        e if e.is_shape_error() => exit_codes::ERROR_SHAPE,
        MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::Cancelled => exit_codes::ERROR_CANCELED,
        MatrixError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        MatrixError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Map an application error to its process exit code.
///
/// Unreadable or malformed input files are configuration errors.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<MatrixError>() {
            return exit_code(e);
        }
        if let Some(e) = cause.downcast_ref::<InputError>() {
            return match e {
                InputError::Matrix(e) => exit_code(e),
                InputError::Read { .. } | InputError::Parse { .. } => exit_codes::ERROR_CONFIG,
            };
        }
    }
    exit_codes::ERROR_GENERIC
}

/// [`exit_code_for`] narrowed to the range accepted by `ExitCode`.
pub fn exit_code_byte(err: &anyhow::Error) -> u8 {
    u8::try_from(exit_code_for(err)).unwrap_or(1)
}
