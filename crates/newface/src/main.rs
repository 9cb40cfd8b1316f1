use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use newface_core::{Editor, EditorConfig, Gallery, UploadOutcome, encode};
use newface_io::{
    ActionPanel, EditorStage, FileUpload, GalleryGrid, PointerAction, SizeSlider, StickerStatus,
    asset, download, share, storage,
};

/// The sticker drawn over every upload.
const STICKER: Asset = asset!("/assets/newface.png");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Read the persisted gallery, starting empty if it is missing or corrupt.
fn restore_gallery(config: &EditorConfig) -> Gallery {
    match storage::load_gallery(&config.storage_key) {
        Ok(gallery) => {
            info!("restored {} saved memes", gallery.len());
            gallery
        }
        Err(e) => {
            warn!("starting with an empty gallery: {e}");
            Gallery::new()
        }
    }
}

/// Root application component.
///
/// Holds the [`Editor`] model in a signal and wires the upload zone,
/// stage, slider, action buttons, and gallery to it. The stage preview is
/// a memo keyed on `scene_rev`, which every change except a drag move
/// bumps; drag moves only restyle the sticker handle.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut editor = use_signal(|| {
        let config = EditorConfig::default();
        let gallery = restore_gallery(&config);
        Editor::with_gallery(config, gallery)
    });
    let mut decoding = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut scene_rev = use_signal(|| 0u64);
    let mut gallery_rev = use_signal(|| 0u64);

    // --- Derived state ---
    let preview = use_memo(move || {
        let _ = scene_rev();
        editor.peek().preview()
    });

    // Only re-copy the gallery when a save happened, not on every drag.
    let gallery_entries = use_memo(move || {
        let _ = gallery_rev();
        Rc::<[String]>::from(editor.peek().gallery().entries())
    });

    // --- Background upload ---
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        let ticket = editor.write().begin_upload();
        decoding.set(true);
        error.set(None);
        debug!("decoding {name} ({} bytes)", bytes.len());

        spawn(async move {
            // Let the browser paint the "Decoding..." state first.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = editor.write().finish_upload(ticket, &bytes);
            match outcome {
                Ok(UploadOutcome::Applied(dims)) => {
                    info!("loaded {name}: {}x{}", dims.width, dims.height);
                    decoding.set(false);
                    scene_rev += 1;
                }
                Ok(UploadOutcome::Stale) => {
                    debug!("discarding stale upload {name}");
                }
                Err(e) => {
                    warn!("could not decode {name}: {e}");
                    error.set(Some(format!("{name}: {e}")));
                    decoding.set(false);
                }
            }
        });
    };

    // --- Sticker ---
    let on_add_sticker = move |()| {
        if !editor.write().request_overlay() {
            return;
        }
        spawn(async move {
            let url = STICKER.to_string();
            match asset::fetch_bytes(&url).await {
                Ok(bytes) => {
                    let loaded = editor.write().finish_overlay(&bytes);
                    match loaded {
                        Ok(()) => scene_rev += 1,
                        Err(e) => {
                            warn!("sticker asset is not a valid image: {e}");
                            error.set(Some(format!("Could not load sticker: {e}")));
                        }
                    }
                }
                Err(e) => {
                    editor.write().overlay_failed();
                    warn!("sticker fetch failed: {e}");
                    error.set(Some(format!("Could not load sticker: {e}")));
                }
            }
        });
    };

    // --- Transform ---
    let on_pointer = move |action: PointerAction| match action {
        PointerAction::Down(p) => {
            editor.write().pointer_down(p);
            scene_rev += 1;
        }
        PointerAction::Move(p) => {
            // Hover moves and moves that land on the same pixel write nothing.
            if editor.peek().move_target(p).is_some() {
                editor.write().pointer_move(p);
            }
        }
        PointerAction::Up => {
            if editor.peek().is_dragging() {
                editor.write().pointer_up();
                scene_rev += 1;
            }
        }
    };

    let on_size = move |size: u32| {
        editor.write().set_size(size);
        scene_rev += 1;
    };

    // --- Export actions ---
    let on_render = move |()| scene_rev += 1;

    let on_download = move |()| {
        let ed = editor.read();
        let result = ed.export_png().map_err(|e| e.to_string()).and_then(|png| {
            download::trigger_download(&png, &ed.config().download_filename, encode::PNG_MIME)
                .map_err(|e| e.to_string())
        });
        drop(ed);
        match result {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(format!("Download failed: {e}"))),
        }
    };

    let on_share = move |()| {
        let url = editor.read().share_url();
        if let Err(e) = share::open_in_new_tab(&url) {
            error.set(Some(format!("Could not open share link: {e}")));
        }
    };

    let on_save = move |()| {
        let saved = editor.write().save_to_gallery();
        match saved {
            Ok(evicted) => {
                if evicted > 0 {
                    debug!("gallery full, dropped {evicted} oldest");
                }
                let ed = editor.read();
                let stored = storage::store_gallery(&ed.config().storage_key, ed.gallery());
                drop(ed);
                match stored {
                    Ok(()) => error.set(None),
                    Err(e) => {
                        warn!("gallery not persisted: {e}");
                        error.set(Some(format!("Saved, but not persisted: {e}")));
                    }
                }
                gallery_rev += 1;
            }
            Err(e) => error.set(Some(format!("Save failed: {e}"))),
        }
    };

    // --- Render ---
    let ed = editor.read();
    let transform = ed.transform();
    let size_bounds = ed.config().size_bounds;
    let sticker = StickerStatus::from(ed.overlay_state());
    let sticker_image = ed.sticker();
    let dragging = ed.is_dragging();
    let has_background = ed.background().is_some();
    drop(ed);

    rsx! {
        // Tailwind CSS utilities, compiled by build.rs.
        style { dangerous_inner_html: include_str!(env!("TAILWIND_CSS_PATH")) }
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-(--bg) text-(--text) flex flex-col",
            header { class: "px-6 py-4 border-b border-(--border)",
                h1 { class: "text-xl font-semibold title-brand", "NewFace" }
                p { class: "text-(--muted) text-sm", "Meme Maker" }
            }

            main { class: "max-w-4xl mx-auto w-full px-4 py-12 flex flex-col items-center gap-8",
                h2 { class: "text-3xl font-bold tracking-tight text-center", "NewFace Meme Maker" }

                FileUpload { on_upload: on_upload }

                if decoding() {
                    p { class: "text-(--text-secondary) animate-pulse", "Decoding..." }
                }

                if let Some(ref err) = error() {
                    div { class: "bg-(--error-bg) border border-(--error-border) rounded p-3",
                        p { class: "text-(--text-error) text-sm", "{err}" }
                    }
                }

                EditorStage {
                    preview: preview(),
                    sticker: sticker_image,
                    transform: transform,
                    dragging: dragging,
                    on_pointer: on_pointer,
                }

                SizeSlider {
                    size: transform.size,
                    bounds: size_bounds,
                    on_change: on_size,
                }

                ActionPanel {
                    has_background: has_background,
                    sticker: sticker,
                    on_add_sticker: on_add_sticker,
                    on_render: on_render,
                    on_download: on_download,
                    on_share: on_share,
                    on_save: on_save,
                }

                GalleryGrid { entries: gallery_entries() }
            }

            footer { class: "text-center text-sm py-6 px-4 border-t border-(--border)",
                p { "NewFace Meme Maker" }
            }
        }
    }
}
