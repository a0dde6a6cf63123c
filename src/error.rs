//! Global error handling for projdump
//!
//! Fatal conditions surface as [`ProjDumpError`]. Per-file read failures are
//! not errors at this level: they are recorded in the generated artifacts.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Global error type for projdump operations
#[derive(Error, Debug)]
pub enum ProjDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A package manifest could not be read or parsed
    #[error("Malformed manifest {}: {reason}", .path.display())]
    Manifest {
        /// Manifest location
        path: PathBuf,
        /// Underlying read or parse failure
        reason: String,
    },

    /// An output artifact could not be opened for writing
    #[error("Cannot write output file {}: {source}", .path.display())]
    Output {
        /// Output location
        path: PathBuf,
        /// Underlying failure
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for projdump operations
pub type Result<T> = std::result::Result<T, ProjDumpError>;

/// Creates a ProjDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ProjDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// main returns io::Result, so fatal errors end up here
impl From<ProjDumpError> for io::Error {
    fn from(err: ProjDumpError) -> Self {
        match err {
            ProjDumpError::Io(e) => e,
            other => {
                let kind = match other {
                    ProjDumpError::PathNotFound(_) => io::ErrorKind::NotFound,
                    _ => io::ErrorKind::Other,
                };
                io::Error::new(kind, other.to_string())
            }
        }
    }
}
