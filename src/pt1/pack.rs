//! PNG to PT1 packing.

use std::io::Write;
use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};
use crate::image::{load_image, write_staged};

use super::{Pt1Header, TYPE_LZSS_24_BYTES_PER_PIXEL};

/// Literals covered by one control byte.
const GROUP_LEN: usize = 8;

/// Pack bytes into an LZSS stream made only of literals.
///
/// Every group of up to eight bytes is preceded by a control byte whose
/// low bits are set, one per literal in the group.
#[must_use]
pub fn pack_literals(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + data.len().div_ceil(GROUP_LEN));

    for group in data.chunks(GROUP_LEN) {
        out.push(u8::MAX >> (GROUP_LEN - group.len()));
        out.extend_from_slice(group);
    }

    out
}

/// Flatten an RGB image to top-down BGR bytes.
fn to_bgr(img: &RgbImage) -> Vec<u8> {
    img.pixels().flat_map(|px| [px[2], px[1], px[0]]).collect()
}

/// Decode the image at `input_path` and write it to `output_path` as a
/// type 0 PT1 file.
///
/// Alpha is discarded; the file holds 24-bit color only. The output is
/// written through a staging file like [`crate::convert`].
///
/// # Errors
///
/// Returns a decode error if the input cannot be loaded, and a write error
/// if the image is too large for the PT1 header or the output cannot be
/// written.
pub fn pack_pt1<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<()> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let rgb = load_image(input_path)?.into_rgb8();
    let (width, height) = rgb.dimensions();

    let pixels = to_bgr(&rgb);
    debug_assert_eq!(
        pixels.len(),
        width as usize * height as usize * TYPE_LZSS_24_BYTES_PER_PIXEL
    );
    let packed = pack_literals(&pixels);

    let header = Pt1Header::lzss_24(width, height, packed.len(), pixels.len()).ok_or_else(|| {
        Error::UnsupportedDimensions {
            path: output_path.to_path_buf(),
            width,
            height,
            reason: "sizes exceed the 32-bit PT1 header".to_string(),
        }
    })?;

    write_staged(output_path, |writer| {
        writer
            .write_all(&header.to_bytes())
            .map_err(|source| Error::write(output_path, source))?;
        writer
            .write_all(&packed)
            .map_err(|source| Error::write(output_path, source))
    })?;

    tracing::info!(
        "Packed {} -> {} ({}x{}, {} bytes)",
        input_path.display(),
        output_path.display(),
        width,
        height,
        super::HEADER_LEN + packed.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::pt1::HEADER_LEN;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_pack_literals_full_group() {
        let data: Vec<u8> = (1..=8).collect();
        assert_eq!(pack_literals(&data), vec![0xFF, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_pack_literals_partial_group() {
        let data: Vec<u8> = (0..11).collect();
        let packed = pack_literals(&data);

        assert_eq!(packed[0], 0xFF);
        assert_eq!(&packed[1..9], &data[..8]);
        assert_eq!(packed[9], 0b0000_0111);
        assert_eq!(&packed[10..], &data[8..]);
    }

    #[test]
    fn test_pack_literals_empty() {
        assert!(pack_literals(&[]).is_empty());
    }

    #[test]
    fn test_bgr_order() {
        let img = RgbImage::from_fn(2, 1, |x, _| Rgb([10 + x as u8, 20, 30]));
        assert_eq!(to_bgr(&img), vec![30, 20, 10, 30, 20, 11]);
    }

    #[test]
    fn test_pack_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("A0_CG01.png");
        let output = dir.path().join("A0_CG01.pt1");
        // Alpha is dropped
        RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 200, 7]))
            .save(&input)
            .unwrap();

        pack_pt1(&input, &output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        let (header, body) = bytes.split_at(HEADER_LEN);
        let pixels: Vec<u8> = (0..2u8)
            .flat_map(|y| (0..3u8).flat_map(move |x| [200, y, x]))
            .collect();

        assert_eq!(
            header,
            Pt1Header::lzss_24(3, 2, body.len(), 18).unwrap().to_bytes()
        );
        assert_eq!(body, pack_literals(&pixels));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pt1");

        let err = pack_pt1(dir.path().join("missing.png"), &output).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(!output.exists());
    }
}
