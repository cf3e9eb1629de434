//! Error types for tile rearrangement

use crate::io::configuration::INVALID_CONFIGURATION_MESSAGE;
use crate::spatial::Dimensions;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all rearrangement operations
#[derive(Debug)]
pub enum RearrangeError {
    /// Tile size or ordering does not fit the image
    ///
    /// Occurs when:
    /// - The tile size is zero or does not divide the image on both axes
    /// - The ordering length differs from the tile count
    /// - The ordering repeats an index or names one outside the grid
    InvalidConfiguration {
        /// Size of the source image
        image_size: Dimensions,
        /// Requested tile size
        tile_size: Dimensions,
        /// Number of entries in the ordering
        ordering_len: usize,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save rearranged image to disk
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

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for RearrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { .. } => f.write_str(INVALID_CONFIGURATION_MESSAGE),
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for RearrangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidConfiguration { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for rearrangement results
pub type Result<T> = std::result::Result<T, RearrangeError>;

/// Create an invalid configuration error for the given inputs
pub const fn invalid_configuration(
    image_size: Dimensions,
    tile_size: Dimensions,
    ordering: &[usize],
) -> RearrangeError {
    RearrangeError::InvalidConfiguration {
        image_size,
        tile_size,
        ordering_len: ordering.len(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RearrangeError {
    RearrangeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
