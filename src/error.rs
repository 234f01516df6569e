//! Error types for tick_pattern.

use thiserror::Error;

/// Errors raised while parsing arguments or writing the rendered image.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Size string is not of the form `<width>x<height>`.
    #[error("\"{0}\" is invalid size.")]
    InvalidSizeFormat(String),

    /// Color string is not of the form `#rrggbb`.
    #[error("\"{0}\" is invalid color format.")]
    InvalidColorFormat(String),

    /// Encoding or writing the image failed.
    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),

    /// The image viewer could not be launched.
    #[error("failed to open preview: {0}")]
    Preview(std::io::Error),
}
