//! The conversion pipeline.

use std::path::Path;

use crate::error::Result;
use crate::image::{self, Compression, Filter};

/// Configuration for the PNG encoding step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// PNG compression effort.
    pub compression: Compression,

    /// PNG scanline filter.
    pub filter: Filter,
}

/// Converts image files to RGBA-32 PNG.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Convert the image at `input_path` to RGBA-32 and write it to
    /// `output_path` as PNG, replacing any existing file.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to any image the `image` crate can decode
    /// * `output_path` - Path to write the PNG to
    ///
    /// # Errors
    ///
    /// Returns a decode error if the input cannot be opened or decoded, in
    /// which case `output_path` is not touched. Returns a write error if the
    /// output cannot be written; an existing file at `output_path` is then
    /// left as it was.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let decoded = image::load_image(input_path)?;
        let source_color = decoded.color();

        let rgba = image::to_rgba32(decoded);

        image::save_png(
            &rgba,
            output_path,
            self.config.compression,
            self.config.filter,
        )?;

        tracing::info!(
            "Converted {} ({:?}) -> {} ({}x{} RGBA8)",
            input_path.display(),
            source_color,
            output_path.display(),
            rgba.width(),
            rgba.height()
        );

        Ok(())
    }
}

/// Convert `input_path` to an RGBA-32 PNG at `output_path` with default
/// settings.
///
/// # Errors
///
/// See [`Converter::convert`].
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<()> {
    Converter::default().convert(input_path, output_path)
}
