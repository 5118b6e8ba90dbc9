//! Error types for layout planning, sampling, asset loading and page output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sheet generation operations
#[derive(Debug)]
pub enum MixerError {
    /// Canvas, cell or grid parameters cannot produce a usable layout
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A category's weights cannot be normalized into probabilities
    InvalidWeights {
        /// Category whose weight set was rejected
        category: &'static str,
        /// Description of the problem
        reason: String,
    },

    /// Source image does not have the configured cell size
    ///
    /// Only raised by the loader in strict mode; the compositor assumes
    /// assets are already cell-sized.
    AssetSizeMismatch {
        /// Path to the image file
        path: PathBuf,
        /// Expected (width, height)
        expected: (u32, u32),
        /// Actual (width, height)
        actual: (u32, u32),
    },

    /// Source image is not a PNG
    UnsupportedFormat {
        /// Path to the image file
        path: PathBuf,
        /// Detected format, if any
        format: String,
    },

    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a finished page to disk
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

    /// Configuration file could not be parsed or serialized
    ConfigFormat {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for MixerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::InvalidWeights { category, reason } => {
                write!(f, "Invalid weights for {category}: {reason}")
            }
            Self::AssetSizeMismatch {
                path,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Image '{}' is {}x{}, expected {}x{}",
                    path.display(),
                    actual.0,
                    actual.1,
                    expected.0,
                    expected.1
                )
            }
            Self::UnsupportedFormat { path, format } => {
                write!(
                    f,
                    "Image '{}' must be PNG format, but is {format}",
                    path.display()
                )
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
            Self::ConfigFormat { path, source } => {
                write!(
                    f,
                    "Malformed configuration file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MixerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ConfigFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sheet generation results
pub type Result<T> = std::result::Result<T, MixerError>;

impl From<image::ImageError> for MixerError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MixerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MixerError {
    MixerError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid weights error
pub fn invalid_weights(category: &'static str, reason: &impl ToString) -> MixerError {
    MixerError::InvalidWeights {
        category,
        reason: reason.to_string(),
    }
}
