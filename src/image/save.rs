//! Image saving utilities.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;

use crate::error::{Error, Result};

/// PNG compression effort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Fastest encoding, larger files.
    Fast,
    /// Encoder default balance.
    #[default]
    Default,
    /// Smallest files, slowest encoding.
    Best,
}

impl From<Compression> for CompressionType {
    fn from(value: Compression) -> Self {
        match value {
            Compression::Fast => Self::Fast,
            Compression::Default => Self::Default,
            Compression::Best => Self::Best,
        }
    }
}

/// PNG scanline filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Store scanlines unfiltered.
    None,
    /// Difference from the pixel to the left.
    Sub,
    /// Difference from the pixel above.
    Up,
    /// Difference from the average of left and above.
    Avg,
    /// Paeth predictor.
    Paeth,
    /// Pick a filter per scanline.
    #[default]
    Adaptive,
}

impl From<Filter> for FilterType {
    fn from(value: Filter) -> Self {
        match value {
            Filter::None => Self::NoFilter,
            Filter::Sub => Self::Sub,
            Filter::Up => Self::Up,
            Filter::Avg => Self::Avg,
            Filter::Paeth => Self::Paeth,
            Filter::Adaptive => Self::Adaptive,
        }
    }
}

/// Encode an RGBA-32 image as PNG and write it to `path`.
///
/// The PNG goes through [`write_staged`], so `path` either keeps its old
/// contents or holds the complete new image.
///
/// # Errors
///
/// Returns [`Error::Write`] if the staging file cannot be created, flushed
/// or renamed, and [`Error::ImageSave`] if encoding fails.
pub fn save_png<P: AsRef<Path>>(
    img: &RgbaImage,
    path: P,
    compression: Compression,
    filter: Filter,
) -> Result<()> {
    let path = path.as_ref();

    write_staged(path, |writer| {
        let encoder = PngEncoder::new_with_quality(writer, compression.into(), filter.into());

        img.write_with_encoder(encoder)
            .map_err(|source| Error::ImageSave {
                path: path.to_path_buf(),
                source,
            })
    })
}

/// Write a file through a staging file in the destination directory.
///
/// `write` fills a buffered writer over the staging file. Once it succeeds
/// and the buffer is flushed, the staging file is renamed over `path`. On
/// any error the staging file is removed and `path` is left untouched.
///
/// # Errors
///
/// Returns [`Error::Write`] if the staging file cannot be created, flushed
/// or renamed, or whatever error `write` returns.
pub(crate) fn write_staged<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".torgba32-").suffix(".tmp");
    // Staging files default to 0600; give the result ordinary file permissions.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut staging = builder
        .tempfile_in(dir)
        .map_err(|source| Error::write(path, source))?;

    {
        let mut writer = BufWriter::new(staging.as_file_mut());
        write(&mut writer)?;
        writer.flush().map_err(|source| Error::write(path, source))?;
    }

    staging
        .persist(path)
        .map_err(|err| Error::write(path, err.error))?;

    Ok(())
}
