use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

/// Error type returned by loading, configuration and the driver.
///
/// Only [`AuditError::NotFound`] is recovered by [`crate::driver::run`]; everything else is
/// fatal for a single audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The input file does not exist.
    #[error("CSV file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Underlying I/O error (e.g. permission denied, broken stdout).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read error (I/O failure mid-read or malformed UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration could not be turned into an [`crate::config::AuditConfig`].
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}
