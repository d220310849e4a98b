//! Pixel format normalization.

use image::{DynamicImage, RgbaImage};

/// Convert any decoded image to 8-bit-per-channel RGBA.
///
/// An RGBA-32 image is returned without copying its buffer. Gray is replicated into red, green and blue. A missing alpha channel
/// becomes fully opaque; an existing one is kept. Wider channels are
/// rescaled to 8 bits: 16-bit values map to `round(v / 257)`, float values
/// to `round(clamp(v, 0, 1) * 255)`.
#[must_use]
pub fn to_rgba32(img: DynamicImage) -> RgbaImage {
    img.into_rgba8()
}
