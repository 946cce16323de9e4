//! Error types for preflight.
//!
//! Uses `thiserror` for the library enum; the binary wraps errors with
//! `anyhow` at the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for preflight operations
pub type PreflightResult<T> = Result<T, PreflightError>;

/// Main error type for preflight operations
#[derive(Error, Debug)]
pub enum PreflightError {
    /// Audit root given on the command line does not exist
    #[error("project root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
