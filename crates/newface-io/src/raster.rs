//! Composite preview encoding and Blob URL creation.
//!
//! Converts `RgbaImage` rasters to browser-displayable Blob URLs by
//! encoding to PNG and creating object URLs via the Web API.

use newface_core::{EditorError, RgbaImage, encode};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur during raster-to-Blob-URL conversion.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] EditorError),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for RasterError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap `bytes` in a `Blob` of type `mime_type` and return an object URL.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
///
/// # Errors
///
/// Returns [`RasterError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, RasterError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Encode a composite as a PNG Blob URL for use as an `<img src>`.
///
/// # Errors
///
/// Returns [`RasterError::PngEncode`] if PNG encoding fails.
/// Returns [`RasterError::JsError`] if Blob or URL creation fails.
pub fn rgba_image_to_blob_url(image: &RgbaImage) -> Result<String, RasterError> {
    let png = encode::encode_png(image)?;
    bytes_to_blob_url(&png, encode::PNG_MIME)
}

/// Revoke a Blob URL previously created by this module.
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked or garbage collected.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
