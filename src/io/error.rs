//! Error types for precondition failures and export operations
//!
//! Domain-level unsolvability (an empty header, segments without a useful
//! move, a reconstruction that misses the end corner) is not an error: it is
//! reported on the margin itself so batch enumeration can continue.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible margin operations
#[derive(Debug)]
pub enum MarginError {
    /// A side name that is not one of right, bottom, left, top
    UnknownSide {
        /// The name that failed to parse
        name: String,
    },

    /// A corner name that is not one of the four canvas corners
    UnknownCorner {
        /// The name that failed to parse
        name: String,
    },

    /// Seed input that does not describe a 2x2 bit pattern
    InvalidSeed {
        /// The rejected input
        value: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSide { name } => {
                write!(f, "Unknown side '{name}' (expected right, bottom, left or top)")
            }
            Self::UnknownCorner { name } => {
                write!(
                    f,
                    "Unknown corner '{name}' (expected topLeft, topRight, bottomLeft or bottomRight)"
                )
            }
            Self::InvalidSeed { value } => {
                write!(
                    f,
                    "Invalid seed '{value}': expected an integer 0-15 or four binary digits"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MarginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for margin results
pub type Result<T> = std::result::Result<T, MarginError>;

impl From<std::io::Error> for MarginError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MarginError {
    MarginError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a failed operation on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MarginError {
    MarginError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
