//! newface-core: the meme editor model (sans-IO).
//!
//! Decodes an uploaded background, places the NewFace sticker on it,
//! tracks drag gestures and the size slider, composites the result, and
//! keeps the list of saved composites:
//! decode -> transform -> composite -> encode -> gallery.
//!
//! This crate has **no I/O dependencies**. It works on in-memory byte
//! slices and rasters; browser interaction lives in `newface-io` and the
//! offline tool in `newface-compose`.

pub mod compositor;
pub mod config;
pub mod decode;
pub mod drag;
pub mod editor;
pub mod encode;
pub mod gallery;
pub mod share;
pub mod types;

pub use compositor::composite;
pub use config::EditorConfig;
pub use drag::{DragController, DragMode, DragSession, DragState};
pub use editor::{Editor, OverlayState, UploadOutcome, UploadTicket};
pub use gallery::{Gallery, GalleryError};
pub use share::ShareIntent;
pub use types::{Dimensions, EditorError, OverlayTransform, Point, RgbaImage, SizeBounds};
