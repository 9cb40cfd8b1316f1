//! newface-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, Blob downloads, the sticker fetch, gallery
//! persistence in local storage, share links, and provides the UI
//! components for the NewFace web application.

pub mod asset;
pub mod components;
pub mod download;
pub mod raster;
pub mod share;
pub mod storage;

pub use components::{
    ActionPanel, EditorStage, FileUpload, GalleryGrid, PointerAction, SizeSlider, StickerStatus,
};
