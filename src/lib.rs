//! # torgba32
//!
//! Normalize raster images to 8-bit-per-channel RGBA (RGBA-32) and re-encode
//! them as PNG.
//!
//! Any image the `image` crate can decode is accepted. Grayscale and RGB
//! sources gain a fully opaque alpha channel, existing alpha is preserved,
//! and 16-bit or float channels are rescaled to 8 bits.
//!
//! [`pack_pt1`] writes the same input as a PT1 image instead.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> torgba32::Result<()> {
//! torgba32::convert("A0_CG01.png", "output_rgba32.png")?;
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod image;
pub mod pt1;

pub use convert::{convert, Config, Converter};
pub use error::{Error, ErrorKind, Result};
pub use self::image::{Compression, Filter};
pub use pt1::pack_pt1;
