//! Error types for glyphplot operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring or rendering a plot.
#[derive(Error, Debug)]
pub enum Error {
    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Invalid dimensions for the character grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width in characters.
        width: u32,
        /// Height in characters.
        height: u32,
    },

    /// Malformed glyph palette table.
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 15 };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_data_length_mismatch() {
        let err = Error::DataLengthMismatch { x_len: 10, y_len: 20 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_invalid_palette() {
        let err = Error::InvalidPalette("thresholds must be strictly increasing".to_string());
        assert!(err.to_string().contains("palette"));
        assert!(err.to_string().contains("strictly increasing"));
    }
}
