//! Error types for matrix, transform and raster operations

use std::fmt;
use std::path::PathBuf;

use crate::matrix::Index2;

/// Underlying reason carried by a [`DimensionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// Two operands have incompatible shapes
    Dimensions,
    /// Square-only operation on a non-square matrix
    NotSquare,
    /// Coordinate or index outside the valid range
    OutOfBounds,
    /// Division by the additive identity
    DivideBy0,
    /// Convolution kernel exceeds the matrix in some dimension
    LargeKernel,
    /// Step or stride is not a positive integer
    InvalidStep,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Dimensions => "inconsistent dimensions",
            Self::NotSquare => "not a square matrix",
            Self::OutOfBounds => "out of bounds",
            Self::DivideBy0 => "division by zero",
            Self::LargeKernel => "the kernel is too large",
            Self::InvalidStep => "the step is not a positive integer",
        };
        f.write_str(text)
    }
}

impl std::error::Error for Cause {}

/// Shape-related failure with the offending operation and dimension pairs
///
/// Built once and never modified; the fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionError {
    operation: &'static str,
    dims: Vec<Index2>,
    cause: Cause,
}

impl DimensionError {
    /// Create a dimension error for `operation`
    pub const fn new(operation: &'static str, dims: Vec<Index2>, cause: Cause) -> Self {
        Self {
            operation,
            dims,
            cause,
        }
    }

    /// Name of the operation that failed
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Dimension pairs or coordinates involved in the failure
    pub fn dims(&self) -> &[Index2] {
        &self.dims
    }

    /// Underlying cause
    pub const fn cause(&self) -> Cause {
        self.cause
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix dimension error: {}(", self.operation)?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, ") {}", self.cause)
    }
}

impl std::error::Error for DimensionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Main error type for all engine operations
#[derive(Debug)]
pub enum EngineError {
    /// Shape, bounds, step or division precondition violated
    Dimension(DimensionError),

    /// Elimination could not produce a nonzero pivot
    Irreducible {
        /// Operation that hit the singular pivot
        operation: &'static str,
    },

    /// Histogram of a plane holding no samples
    EmptyPlane {
        /// Operation that needed at least one sample
        operation: &'static str,
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

    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

impl EngineError {
    /// Cause of a dimension failure, if this is one
    pub const fn cause(&self) -> Option<Cause> {
        match self {
            Self::Dimension(err) => Some(err.cause()),
            _ => None,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension(err) => write!(f, "{err}"),
            Self::Irreducible { operation } => {
                write!(f, "{operation}: matrix is irreducible (singular pivot)")
            }
            Self::EmptyPlane { operation } => {
                write!(f, "{operation}: plane holds no samples")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dimension(err) => Some(err),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<DimensionError> for EngineError {
    fn from(err: DimensionError) -> Self {
        Self::Dimension(err)
    }
}

impl From<image::ImageError> for EngineError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a dimension error wrapped as an engine error
pub fn dimension_error(operation: &'static str, dims: Vec<Index2>, cause: Cause) -> EngineError {
    EngineError::Dimension(DimensionError::new(operation, dims, cause))
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
