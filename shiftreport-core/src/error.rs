//! Error types for the shiftreport ecosystem.

use thiserror::Error;

/// Errors that can occur in shiftreport operations.
///
/// Note that the extraction pipeline itself never surfaces these: missing
/// files and malformed event blocks degrade to empty/partial results by
/// contract. The error type exists for the configuration layer.
#[derive(Error, Debug)]
pub enum ShiftReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shiftreport operations.
pub type ShiftReportResult<T> = Result<T, ShiftReportError>;
