//! Custom error types for torgba32.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the torgba32 library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode the input image.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode the image as PNG.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image dimensions do not fit the output format.
    #[error("unsupported image dimensions {width}x{height} for {path}: {reason}")]
    UnsupportedDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
        reason: String,
    },

    /// Failed to create, flush or move the output file into place.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The two ways a conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is missing, unreadable or not a decodable image.
    Decode,
    /// The output location cannot be written.
    Write,
}

impl Error {
    /// Which side of the conversion failed.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ImageLoad { .. } => ErrorKind::Decode,
            Self::ImageSave { .. } | Self::UnsupportedDimensions { .. } | Self::Write { .. } => {
                ErrorKind::Write
            }
        }
    }

    /// Path of the file the failing operation was working on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ImageLoad { path, .. }
            | Self::ImageSave { path, .. }
            | Self::UnsupportedDimensions { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for torgba32 operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err = Error::write(
            Path::new("out.png"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::Write);
        assert_eq!(err.path(), Path::new("out.png"));

        let err = Error::ImageLoad {
            path: PathBuf::from("in.png"),
            source: image::ImageError::IoError(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )),
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_display_includes_path() {
        let err = Error::write(
            Path::new("missing/out.png"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("missing/out.png"));
    }
}
