use std::path::PathBuf;

/// Errors raised while loading, filtering or saving an image.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// The input path does not exist.
    #[error("File does not exist: {0}")]
    FileNotFound(PathBuf),

    /// The input path exists but could not be read.
    #[error("Failed to read {0}. {1}")]
    Unreadable(PathBuf, #[source] std::io::Error),

    /// The codec cannot handle the format of the input content or output extension.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The format was recognized but the data could not be decoded.
    #[error("Failed to decode {0}. {1}")]
    Decode(PathBuf, #[source] image::ImageError),

    /// The filtered image could not be encoded.
    #[error("Failed to encode {0}. {1}")]
    Encode(PathBuf, #[source] image::ImageError),

    /// The encoded image could not be written to disk.
    #[error("Failed to write {0}. {1}")]
    Write(PathBuf, #[source] std::io::Error),

    /// The filter name is not one of the known filters.
    #[error("Invalid filter '{0}'. Choose from: grayscale, blur, edge_enhance, invert, sepia")]
    InvalidFilterName(String),

    /// A filter parameter is out of range for the given image.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel data does not match the requested dimensions or channel count.
    #[error("Invalid image shape: {0}")]
    InvalidShape(String),

    /// A filter was requested before any image was opened.
    #[error("No image loaded. Please open an image first!")]
    NoImageLoaded,
}

impl From<ndarray::ShapeError> for FilterError {
    fn from(err: ndarray::ShapeError) -> Self {
        FilterError::InvalidShape(err.to_string())
    }
}
