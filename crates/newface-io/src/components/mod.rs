//! Dioxus UI components for NewFace.
//!
//! Provides the background upload zone, the editing stage with its
//! draggable sticker handle, the size slider, the action buttons, and
//! the gallery grid.

mod actions;
mod gallery;
mod size_slider;
mod stage;
mod upload;

pub use actions::{ActionPanel, StickerStatus};
pub use gallery::GalleryGrid;
pub use size_slider::SizeSlider;
pub use stage::{EditorStage, PointerAction};
pub use upload::FileUpload;
