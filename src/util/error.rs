//! Error types for yawcorr.

use thiserror::Error;

/// Result alias for yawcorr operations.
pub type YawCorrResult<T> = std::result::Result<T, YawCorrError>;

/// Errors that can occur when building yawcorr helpers.
///
/// The correction function itself is infallible; errors only arise from
/// fallible construction of derived structures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum YawCorrError {
    /// The correction table grid parameters are invalid.
    #[error("invalid correction grid: {reason}")]
    InvalidGrid {
        /// Why the grid was rejected.
        reason: &'static str,
    },
}
