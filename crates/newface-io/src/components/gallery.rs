//! Grid of saved composites.

use std::rc::Rc;

use dioxus::prelude::*;

/// Props for the [`GalleryGrid`] component.
#[derive(Props, Clone)]
pub struct GalleryGridProps {
    /// Saved composites as `data:` URLs, newest first.
    /// Shared via `Rc` so re-renders do not copy the encoded images.
    entries: Rc<[String]>,
}

impl PartialEq for GalleryGridProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Saved memes, newest first, in a responsive grid.
#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    rsx! {
        section { class: "w-full",
            h3 { class: "text-2xl font-semibold text-(--text-heading) mb-4", "Meme Gallery" }

            if props.entries.is_empty() {
                p { class: "text-(--muted) text-sm", "Saved memes show up here." }
            } else {
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for (idx, meme) in props.entries.iter().enumerate() {
                        img {
                            key: "{idx}",
                            src: "{meme}",
                            alt: "meme-{idx}",
                            class: "w-full rounded border border-(--border)",
                        }
                    }
                }
            }
        }
    }
}
