//! Error types shared by the buffer, the filters and the host boundary.

use thiserror::Error;

/// Sentinel returned to the host when a call is missing arguments.
pub const MISSING_ARGUMENTS: &str = "MISSING_ARGUMENTS";

/// Errors that can occur before a filter enters its pixel loop.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The host did not supply an argument the filter requires.
    #[error("filter `{filter}` is missing the `{argument}` argument")]
    MissingArguments {
        /// Host-facing filter name.
        filter: &'static str,
        /// Name of the first missing argument.
        argument: &'static str,
    },

    /// The buffer length is not a whole number of RGBA pixels.
    #[error("buffer length {0} is not a multiple of 4")]
    NotPixelAligned(usize),

    /// The buffer length does not match the declared extents.
    #[error("buffer length {len} does not match {width}x{height} RGBA pixels")]
    DimensionMismatch {
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
        /// Actual buffer length in bytes.
        len: usize,
    },

    /// Zero width or zero height.
    #[error("image extents must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
    },

    /// An array input that does not carry exactly four channels.
    #[error("expected 4 channels (RGBA), got {0}")]
    ChannelMismatch(usize),

    /// The requested worker count is invalid.
    #[error("worker count must be > 0, got {0}")]
    InvalidWorkerCount(usize),

    /// A dedicated worker pool failed to build.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// The host asked for a filter that does not exist.
    #[error("unknown filter `{0}`")]
    UnknownFilter(String),

    /// The host asked for a grayscale mode that does not exist.
    #[error("unknown grayscale mode `{0}`")]
    UnknownGrayscaleMode(String),

    /// An ndarray view could not be built over the buffer.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

impl FilterError {
    /// Message handed back across the host boundary.
    ///
    /// Missing arguments collapse to the [`MISSING_ARGUMENTS`] sentinel so the
    /// host can test for it by equality; everything else is descriptive.
    pub fn host_message(&self) -> String {
        match self {
            FilterError::MissingArguments { .. } => MISSING_ARGUMENTS.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments_maps_to_sentinel() {
        let err = FilterError::MissingArguments {
            filter: "binary",
            argument: "threshold",
        };
        assert_eq!(err.host_message(), MISSING_ARGUMENTS);
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_other_errors_are_descriptive() {
        let err = FilterError::DimensionMismatch {
            width: 2,
            height: 2,
            len: 12,
        };
        assert_eq!(
            err.host_message(),
            "buffer length 12 does not match 2x2 RGBA pixels"
        );
    }
}
