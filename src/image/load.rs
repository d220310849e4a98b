//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{Error, Result};

/// Open and fully decode an image from disk.
///
/// The format is sniffed from the file contents, falling back to the
/// extension when the signature is not recognized.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file does not exist, cannot be read,
/// or does not decode as an image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let load_err = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}
