//! PT1 images, the raster format of Black Package engine archives.
//!
//! A PT1 file is a 32-byte little-endian header followed by the packed
//! pixel stream:
//!
//! | Offset | Field                                   |
//! |--------|-----------------------------------------|
//! | 0      | image type (0-3)                        |
//! | 4      | marker, always -1                       |
//! | 8      | x offset                                |
//! | 12     | y offset                                |
//! | 16     | width                                   |
//! | 20     | height                                  |
//! | 24     | packed stream length                    |
//! | 28     | unpacked pixel length                   |
//!
//! Only type 0 is written: 24-bit BGR pixels, top row first, stored as an
//! LZSS stream that contains literals only.

mod pack;

pub use pack::{pack_literals, pack_pt1};

/// Size of the PT1 header in bytes.
pub const HEADER_LEN: usize = 32;

/// Header marker that follows the image type.
pub const MARKER: i32 = -1;

/// Type 0: 24-bit pixels in an LZSS stream.
pub const TYPE_LZSS_24: i32 = 0;

/// Bytes per pixel of a type 0 image.
pub const TYPE_LZSS_24_BYTES_PER_PIXEL: usize = 3;

/// Fixed-size header at the start of every PT1 file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pt1Header {
    pub image_type: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
    pub packed_len: i32,
    pub unpacked_len: i32,
}

impl Pt1Header {
    /// Header for a type 0 image at offset (0, 0).
    ///
    /// Returns `None` if any field does not fit the header's 32-bit signed
    /// integers.
    #[must_use]
    pub fn lzss_24(width: u32, height: u32, packed_len: usize, unpacked_len: usize) -> Option<Self> {
        Some(Self {
            image_type: TYPE_LZSS_24,
            offset_x: 0,
            offset_y: 0,
            width: i32::try_from(width).ok()?,
            height: i32::try_from(height).ok()?,
            packed_len: i32::try_from(packed_len).ok()?,
            unpacked_len: i32::try_from(unpacked_len).ok()?,
        })
    }

    /// Serialize the header in file order.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let fields = [
            self.image_type,
            MARKER,
            self.offset_x,
            self.offset_y,
            self.width,
            self.height,
            self.packed_len,
            self.unpacked_len,
        ];

        let mut out = [0u8; HEADER_LEN];
        for (slot, field) in out.chunks_exact_mut(4).zip(fields) {
            slot.copy_from_slice(&field.to_le_bytes());
        }
        out
    }
}
