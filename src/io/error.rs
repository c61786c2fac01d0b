//! Error types for all pipeline operations
//!
//! Failures are isolated at the (directory, mask) granularity by the batch
//! layer: a directory-level error skips that directory's masks, a mask-level
//! error skips only that mask. Every variant carries enough path context for
//! the operator to locate the offending input.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all quantification operations
#[derive(Debug)]
pub enum QuantError {
    /// Localization container could not be opened
    ClusterRead {
        /// Path to the container file
        path: PathBuf,
        /// Underlying HDF5 error
        source: hdf5::Error,
    },

    /// Localization container is missing the expected table or fields
    ClusterFormat {
        /// Path to the container file
        path: PathBuf,
        /// Description of what's wrong with the container layout
        reason: String,
    },

    /// Mask image could not be decoded
    ImageRead {
        /// Path to the mask file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A rescaled cluster coordinate rounds to an index outside the mask grid
    PointOutOfBounds {
        /// Rounded `[x, y]` index of the offending point
        point: [i64; 2],
        /// Mask grid dimensions (x extent, y extent)
        dimensions: (usize, usize),
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

    /// Directory holds no localization container
    MissingClusterFile {
        /// Directory that was scanned
        directory: PathBuf,
    },

    /// Failed to write a quantification record
    Report {
        /// Path where the record was being written
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Failed to save an overlay image to disk
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

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for QuantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClusterRead { path, source } => {
                write!(
                    f,
                    "Failed to open cluster file '{}': {source}",
                    path.display()
                )
            }
            Self::ClusterFormat { path, reason } => {
                write!(f, "Invalid cluster file '{}': {reason}", path.display())
            }
            Self::ImageRead { path, source } => {
                write!(f, "Failed to load mask '{}': {source}", path.display())
            }
            Self::PointOutOfBounds { point, dimensions } => {
                write!(
                    f,
                    "Cluster center ({}, {}) is outside the {}x{} mask grid",
                    point[0], point[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingClusterFile { directory } => {
                write!(
                    f,
                    "No .hdf5 cluster file found in '{}'",
                    directory.display()
                )
            }
            Self::Report { path, source } => {
                write!(
                    f,
                    "Failed to write record to '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export overlay to '{}': {source}",
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for QuantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClusterRead { source, .. } => Some(source),
            Self::ImageRead { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Report { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for quantification results
pub type Result<T> = std::result::Result<T, QuantError>;

impl From<std::io::Error> for QuantError {
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
) -> QuantError {
    QuantError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a cluster container format error
pub fn cluster_format(path: impl Into<PathBuf>, reason: impl ToString) -> QuantError {
    QuantError::ClusterFormat {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> QuantError {
    QuantError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
