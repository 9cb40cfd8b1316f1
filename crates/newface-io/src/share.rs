//! Opening share intents in a new browser tab.

use wasm_bindgen::JsValue;

/// Errors that can occur when opening the share link.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// `window.open` returned `null`, usually because a popup blocker
    /// intervened.
    #[error("share window was blocked")]
    Blocked,
}

impl From<JsValue> for ShareError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Open `url` in a new tab (`window.open(url, "_blank")`).
///
/// Must be called from a user-gesture handler or the popup blocker will
/// refuse it.
///
/// # Errors
///
/// Returns [`ShareError::Blocked`] if the browser refused to open a
/// window, or [`ShareError::JsError`] if the call itself failed.
pub fn open_in_new_tab(url: &str) -> Result<(), ShareError> {
    let window =
        web_sys::window().ok_or_else(|| ShareError::JsError("no global window".into()))?;
    window
        .open_with_url_and_target(url, "_blank")?
        .map(|_| ())
        .ok_or(ShareError::Blocked)
}
