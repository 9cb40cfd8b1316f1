//! Composite encoding: PNG bytes and `data:` URLs.
//!
//! Gallery entries are stored as PNG data URLs so they can be placed
//! straight into an `<img src>` after a page reload.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageEncoder, RgbaImage};

use crate::types::EditorError;

/// MIME type of every encoded composite.
pub const PNG_MIME: &str = "image/png";

/// Encode an RGBA raster as PNG bytes.
///
/// # Errors
///
/// Returns [`EditorError::Encode`] if the PNG encoder rejects the buffer.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EditorError> {
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(EditorError::Encode)?;
    Ok(png_bytes)
}

/// Wrap already-encoded bytes in a base64 `data:` URL.
#[must_use]
pub fn to_data_url(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Encode an RGBA raster as a `data:image/png;base64,...` string.
///
/// # Errors
///
/// Returns [`EditorError::Encode`] if PNG encoding fails.
pub fn encode_png_data_url(image: &RgbaImage) -> Result<String, EditorError> {
    let png = encode_png(image)?;
    Ok(to_data_url(&png, PNG_MIME))
}

/// Decode the payload of a base64 `data:` URL back into bytes.
///
/// Returns `None` for anything that is not a base64 data URL.
#[must_use]
pub fn data_url_bytes(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::decode::decode_rgba;

    #[test]
    fn png_starts_with_signature() {
        let img = RgbaImage::new(3, 2);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn data_url_has_png_prefix() {
        let img = RgbaImage::new(1, 1);
        let url = encode_png_data_url(&img).unwrap();
        assert!(url.starts_with("data:image/png;base64,"), "got {url}");
    }

    #[test]
    fn data_url_payload_decodes_to_same_pixels() {
        let img = RgbaImage::from_fn(4, 4, |x, y| image::Rgba([x as u8 * 60, y as u8 * 60, 9, 255]));
        let url = encode_png_data_url(&img).unwrap();

        let bytes = data_url_bytes(&url).unwrap();
        let back = decode_rgba(&bytes).unwrap();
        assert_eq!(back.as_raw(), img.as_raw());
    }

    #[test]
    fn data_url_bytes_rejects_non_base64() {
        assert!(data_url_bytes("data:text/plain,hello").is_none());
        assert!(data_url_bytes("https://example.com/x.png").is_none());
    }
}
