//! Editor configuration.
//!
//! Every field has a default matching the shipped web app. The
//! `DEFAULT_*` constants are public so command-line front ends can use
//! them as argument defaults.

use serde::{Deserialize, Serialize};

use crate::drag::DragMode;
use crate::share::ShareIntent;
use crate::types::{OverlayTransform, SizeBounds};

/// Configuration for an [`Editor`](crate::Editor) session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Sticker placement when a session starts.
    pub initial_transform: OverlayTransform,

    /// Allowed sticker edge length (the size slider's range).
    pub size_bounds: SizeBounds,

    /// How pointer moves translate into sticker movement.
    pub drag_mode: DragMode,

    /// Maximum number of saved composites; the oldest are dropped past
    /// this. `None` (the default) keeps everything.
    pub max_gallery_entries: Option<usize>,

    /// Filename used for downloads.
    pub download_filename: String,

    /// Local-storage key holding the gallery JSON.
    pub storage_key: String,

    /// Caption and hashtags for the share action.
    pub share: ShareIntent,
}

impl EditorConfig {
    /// Default initial sticker x position.
    pub const DEFAULT_X: i32 = 50;
    /// Default initial sticker y position.
    pub const DEFAULT_Y: i32 = 50;
    /// Default sticker edge length.
    pub const DEFAULT_SIZE: u32 = 100;
    /// Smallest sticker edge length.
    pub const MIN_SIZE: u32 = 50;
    /// Largest sticker edge length.
    pub const MAX_SIZE: u32 = 300;
    /// Default download filename.
    pub const DEFAULT_DOWNLOAD_FILENAME: &str = "newface-meme.png";
    /// Default local-storage key.
    pub const DEFAULT_STORAGE_KEY: &str = "memeGallery";
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_transform: OverlayTransform::new(
                Self::DEFAULT_X,
                Self::DEFAULT_Y,
                Self::DEFAULT_SIZE,
            ),
            size_bounds: SizeBounds {
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            },
            drag_mode: DragMode::default(),
            max_gallery_entries: None,
            download_filename: Self::DEFAULT_DOWNLOAD_FILENAME.to_owned(),
            storage_key: Self::DEFAULT_STORAGE_KEY.to_owned(),
            share: ShareIntent::default(),
        }
    }
}
