//! The editing stage: composite preview plus a draggable sticker handle.
//!
//! The preview is shown at its natural pixel size inside a scrollable
//! container so one CSS pixel equals one canvas pixel, and pointer
//! deltas map 1:1 onto sticker movement.
//!
//! While a drag is in progress the preview is the bare background and the
//! sticker is an `<img>` inside the handle, so a pointer move only
//! restyles the handle. The composite is rebuilt once the drag ends.

use std::rc::Rc;

use dioxus::prelude::*;
use newface_core::{OverlayTransform, Point, RgbaImage};

use crate::raster::{self, RasterError};

/// A pointer gesture on the stage, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pressed on the sticker handle.
    Down(Point),
    /// Moved anywhere over the stage.
    Move(Point),
    /// Released, cancelled, or left the stage.
    Up,
}

/// Props for the [`EditorStage`] component.
#[derive(Props, Clone)]
pub struct EditorStageProps {
    /// Image to show: the composite, or the background during a drag.
    /// `None` before any upload.
    preview: Option<Rc<RgbaImage>>,
    /// The decoded sticker, once loaded. Drawn by the stage during a drag.
    sticker: Option<Rc<RgbaImage>>,
    /// Sticker placement, used to position the drag handle.
    transform: OverlayTransform,
    /// Whether a drag is in progress.
    dragging: bool,
    /// Called for every pointer gesture on the stage.
    on_pointer: EventHandler<PointerAction>,
}

fn same_image(a: Option<&Rc<RgbaImage>>, b: Option<&Rc<RgbaImage>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for EditorStageProps {
    fn eq(&self, other: &Self) -> bool {
        same_image(self.preview.as_ref(), other.preview.as_ref())
            && same_image(self.sticker.as_ref(), other.sticker.as_ref())
            && self.transform == other.transform
            && self.dragging == other.dragging
    }
}

/// A Blob URL together with the image it was encoded from.
type BlobCache = Signal<Option<(Rc<RgbaImage>, String)>>;

/// Blob URL for `image`, encoding it only when it differs from the cached
/// one. The replaced URL is revoked.
fn cached_blob_url(cache: &mut BlobCache, image: &Rc<RgbaImage>) -> Result<String, RasterError> {
    if let Some((cached, url)) = &*cache.peek()
        && Rc::ptr_eq(cached, image)
    {
        return Ok(url.clone());
    }
    let url = raster::rgba_image_to_blob_url(image)?;
    let replaced = cache.write().replace((Rc::clone(image), url.clone()));
    if let Some((_, old)) = replaced {
        raster::revoke_blob_url(&old);
    }
    Ok(url)
}

/// Composite preview with a draggable sticker handle.
///
/// Uses pointer events, which cover mouse, pen, and touch input; the
/// container sets `touch-action: none` so a touch drag does not scroll
/// the page instead.
#[component]
pub fn EditorStage(props: EditorStageProps) -> Element {
    // Re-renders for a moved handle reuse these; revoked on unmount.
    let mut preview_cache: BlobCache = use_signal(|| None);
    let mut sticker_cache: BlobCache = use_signal(|| None);

    use_drop(move || {
        for cache in [preview_cache, sticker_cache] {
            if let Some((_, ref url)) = *cache.peek() {
                raster::revoke_blob_url(url);
            }
        }
    });

    let Some(preview) = props.preview.as_ref() else {
        return rsx! {
            div { class: "flex items-center justify-center h-64 border border-dashed border-(--border-muted) rounded",
                p { class: "text-(--text-placeholder) text-lg", "Upload an image to get started" }
            }
        };
    };

    let url = match cached_blob_url(&mut preview_cache, preview) {
        Ok(url) => url,
        Err(e) => {
            return rsx! {
                p { class: "text-(--text-error) text-sm", "Failed to render preview: {e}" }
            };
        }
    };

    // Only needed while dragging; the handle is bare otherwise.
    let sticker_url = match (&props.sticker, props.dragging) {
        (Some(sticker), true) => cached_blob_url(&mut sticker_cache, sticker).ok(),
        _ => None,
    };

    let (w, h) = preview.dimensions();
    let OverlayTransform { position, size } = props.transform;
    let on_pointer = props.on_pointer;

    rsx! {
        div {
            class: "relative overflow-auto max-w-full border border-dashed border-(--border-muted) rounded select-none",
            style: "touch-action: none;",
            onpointermove: move |evt: PointerEvent| on_pointer.call(PointerAction::Move(client_point(&evt))),
            onpointerup: move |_| on_pointer.call(PointerAction::Up),
            onpointercancel: move |_| on_pointer.call(PointerAction::Up),
            onpointerleave: move |_| on_pointer.call(PointerAction::Up),

            div { class: "relative overflow-hidden", style: "width: {w}px; height: {h}px;",
                img {
                    src: "{url}",
                    class: "block max-w-none",
                    width: "{w}",
                    height: "{h}",
                    alt: "Meme preview",
                    draggable: false,
                }

                if props.sticker.is_some() {
                    div {
                        class: "absolute cursor-move outline-1 outline-dashed outline-(--border-accent)",
                        style: "left: {position.x}px; top: {position.y}px; width: {size}px; height: {size}px;",
                        title: "Drag to move",
                        onpointerdown: move |evt: PointerEvent| {
                            evt.prevent_default();
                            on_pointer.call(PointerAction::Down(client_point(&evt)));
                        },

                        if let Some(ref sticker_url) = sticker_url {
                            img {
                                src: "{sticker_url}",
                                class: "block w-full h-full pointer-events-none",
                                alt: "",
                                draggable: false,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Client coordinates of a pointer event, rounded to whole pixels.
#[allow(clippy::cast_possible_truncation)]
fn client_point(evt: &PointerEvent) -> Point {
    let c = evt.client_coordinates();
    Point::new(c.x.round() as i32, c.y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_image_compares_by_identity() {
        let a = Rc::new(RgbaImage::new(2, 2));
        let b = Rc::new(RgbaImage::new(2, 2));
        assert!(same_image(Some(&a), Some(&Rc::clone(&a))));
        assert!(!same_image(Some(&a), Some(&b)));
        assert!(same_image(None, None));
        assert!(!same_image(Some(&a), None));
    }
}
