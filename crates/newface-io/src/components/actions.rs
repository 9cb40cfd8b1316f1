//! Action buttons: add sticker, render, download, share, save.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdRefreshCw, LdSave, LdShare2, LdSmilePlus};
use newface_core::OverlayState;

/// Sticker availability, as shown on the "Add NewFace" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickerStatus {
    /// Not requested yet (or the last fetch failed).
    Missing,
    /// Fetch in flight.
    Loading,
    /// Loaded and drawn.
    Ready,
}

impl From<&OverlayState> for StickerStatus {
    fn from(state: &OverlayState) -> Self {
        match state {
            OverlayState::NotLoaded => Self::Missing,
            OverlayState::Loading => Self::Loading,
            OverlayState::Loaded(_) => Self::Ready,
        }
    }
}

/// Props for the [`ActionPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ActionPanelProps {
    /// Whether a background is loaded; export actions are disabled otherwise.
    has_background: bool,
    /// Current sticker status.
    sticker: StickerStatus,
    /// Fetch the sticker.
    on_add_sticker: EventHandler<()>,
    /// Recompute the composite.
    on_render: EventHandler<()>,
    /// Download the composite.
    on_download: EventHandler<()>,
    /// Open the share intent.
    on_share: EventHandler<()>,
    /// Save the composite to the gallery.
    on_save: EventHandler<()>,
}

const ENABLED_CLASS: &str = "inline-flex items-center gap-2 px-4 py-2 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded text-white font-medium transition-colors cursor-pointer";
const DISABLED_CLASS: &str = "inline-flex items-center gap-2 px-4 py-2 bg-(--btn-disabled) rounded text-(--text-disabled) cursor-not-allowed";

/// Row of editor actions.
///
/// Share only needs the caption, so it stays enabled without a
/// background; the other exports need a composite.
#[component]
pub fn ActionPanel(props: ActionPanelProps) -> Element {
    let export_class = if props.has_background {
        ENABLED_CLASS
    } else {
        DISABLED_CLASS
    };
    let sticker_enabled = props.sticker == StickerStatus::Missing;
    let sticker_class = if sticker_enabled {
        ENABLED_CLASS
    } else {
        DISABLED_CLASS
    };
    let sticker_label = match props.sticker {
        StickerStatus::Missing => "Add NewFace",
        StickerStatus::Loading => "Loading...",
        StickerStatus::Ready => "NewFace added",
    };

    rsx! {
        div { class: "flex flex-col items-center gap-4",
            button {
                class: "{sticker_class}",
                disabled: !sticker_enabled,
                onclick: move |_| props.on_add_sticker.call(()),
                Icon { icon: LdSmilePlus, width: 16, height: 16 }
                "{sticker_label}"
            }

            div { class: "flex flex-wrap justify-center gap-3",
                button {
                    class: "{export_class}",
                    disabled: !props.has_background,
                    onclick: move |_| props.on_render.call(()),
                    Icon { icon: LdRefreshCw, width: 16, height: 16 }
                    "Render"
                }
                button {
                    class: "{export_class}",
                    disabled: !props.has_background,
                    onclick: move |_| props.on_download.call(()),
                    Icon { icon: LdDownload, width: 16, height: 16 }
                    "Download"
                }
                button {
                    class: "{ENABLED_CLASS}",
                    onclick: move |_| props.on_share.call(()),
                    Icon { icon: LdShare2, width: 16, height: 16 }
                    "Tweet"
                }
                button {
                    class: "{export_class}",
                    disabled: !props.has_background,
                    onclick: move |_| props.on_save.call(()),
                    Icon { icon: LdSave, width: 16, height: 16 }
                    "Save"
                }
            }
        }
    }
}
