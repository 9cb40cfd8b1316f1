//! Fetching bundled assets (the sticker image) over HTTP.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur while fetching an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The server answered with a non-success status.
    #[error("fetching {url} failed with HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// A browser API call returned an error or a required object was missing.
    #[error("fetch API error: {0}")]
    JsError(String),
}

impl From<JsValue> for AssetError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Fetch `url` and return the response body.
///
/// Wraps [`window.fetch()`][mdn] followed by `Response.arrayBuffer()`.
///
/// # Errors
///
/// Returns [`AssetError::Status`] for non-2xx responses and
/// [`AssetError::JsError`] if the request or body read fails.
///
/// [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/Window/fetch
#[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let window =
        web_sys::window().ok_or_else(|| AssetError::JsError("no global window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(url)).await?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| AssetError::JsError(format!("fetch did not return a Response: {e:?}")))?;

    if !response.ok() {
        return Err(AssetError::Status {
            url: url.to_owned(),
            status: response.status(),
        });
    }

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
