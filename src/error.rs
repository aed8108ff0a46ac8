//! Error types for txt2epub operations.

use thiserror::Error;

/// Errors that can occur during conversion or EPUB writing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("cover image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("malformed manuscript structure: {0}")]
    MalformedStructure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
