//! Shared error type across airmetrics crates.

use thiserror::Error;

/// Stable error codes, used by drivers and test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input: out-of-range value or incompatible transfer source.
    InvalidArgument,
    /// Operation not valid in the current state (undefined mode).
    IllegalState,
}

impl ErrorKind {
    /// String representation used in reports and vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::IllegalState => "ILLEGAL_STATE",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type for store and view operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl MetricsError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MetricsError::IllegalState(_) => ErrorKind::IllegalState,
        }
    }
}
