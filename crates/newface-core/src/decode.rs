//! Image decoding.
//!
//! Accepts raw file bytes (PNG, JPEG, BMP, WebP, GIF) and produces an
//! RGBA raster at the image's natural dimensions. Used for both the
//! uploaded background and the sticker asset.

use image::RgbaImage;

use crate::types::EditorError;

/// Decode raw image bytes into an RGBA raster.
///
/// The format is sniffed from the data, not from a filename, so a file
/// picked with a misleading extension still decodes if its contents are
/// a supported format.
///
/// # Errors
///
/// Returns [`EditorError::EmptyInput`] if `bytes` is empty.
/// Returns [`EditorError::ImageDecode`] if the format is unrecognized or
/// the data is corrupt.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, EditorError> {
    if bytes.is_empty() {
        return Err(EditorError::EmptyInput);
    }

    let img = image::load_from_memory(bytes).map_err(EditorError::ImageDecode)?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::encode::encode_png;

    #[test]
    fn empty_input_returns_error() {
        let result = decode_rgba(&[]);
        assert!(matches!(result, Err(EditorError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_returns_image_decode_error() {
        let result = decode_rgba(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(EditorError::ImageDecode(_))));
    }

    #[test]
    fn natural_dimensions_are_preserved() {
        let img = RgbaImage::from_fn(17, 31, |_, _| image::Rgba([128, 64, 32, 255]));
        let png = encode_png(&img).unwrap();

        let decoded = decode_rgba(&png).unwrap();
        assert_eq!(decoded.dimensions(), (17, 31));
        assert_eq!(decoded.get_pixel(3, 4).0, [128, 64, 32, 255]);
    }

    #[test]
    fn transparency_survives_decode() {
        let img = RgbaImage::from_fn(2, 2, |x, _| image::Rgba([255, 0, 0, if x == 0 { 0 } else { 255 }]));
        let png = encode_png(&img).unwrap();

        let decoded = decode_rgba(&png).unwrap();
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
        assert_eq!(decoded.get_pixel(1, 0).0[3], 255);
    }
}
