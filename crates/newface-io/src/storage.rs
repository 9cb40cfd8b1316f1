//! Gallery persistence in `window.localStorage`.
//!
//! The gallery lives under a single key as a JSON array of data-URL
//! strings. It is read once at startup and rewritten wholesale after
//! every save.

use newface_core::{Gallery, GalleryError};
use wasm_bindgen::JsValue;

/// Errors that can occur when reading or writing local storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Local storage is unavailable (private mode, disabled, no window).
    #[error("local storage unavailable: {0}")]
    Unavailable(String),

    /// The stored value could not be parsed or serialized.
    #[error(transparent)]
    Gallery(#[from] GalleryError),

    /// A browser API call returned an error (e.g. quota exceeded).
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Read the gallery stored under `key`.
///
/// A missing key is an empty gallery, not an error.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if local storage cannot be
/// reached, or [`StorageError::Gallery`] if the stored JSON is corrupt.
pub fn load_gallery(key: &str) -> Result<Gallery, StorageError> {
    let storage = local_storage()?;
    match storage.get_item(key)? {
        Some(json) => Ok(Gallery::from_json(&json)?),
        None => Ok(Gallery::new()),
    }
}

/// Overwrite the value under `key` with `gallery`.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if local storage cannot be
/// reached, or [`StorageError::JsError`] if the write is rejected
/// (typically the storage quota).
pub fn store_gallery(key: &str, gallery: &Gallery) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let json = gallery.to_json()?;
    storage.set_item(key, &json)?;
    Ok(())
}

/// Obtain `window.localStorage`.
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no global window".into()))?;
    window
        .local_storage()?
        .ok_or_else(|| StorageError::Unavailable("localStorage is null".into()))
}
