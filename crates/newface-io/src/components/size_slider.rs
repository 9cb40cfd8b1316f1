//! Range slider for the sticker edge length.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use newface_core::SizeBounds;

/// Props for the [`SizeSlider`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SizeSliderProps {
    /// Current edge length in pixels.
    size: u32,
    /// Slider range.
    bounds: SizeBounds,
    /// Called with the new edge length while the slider moves.
    on_change: EventHandler<u32>,
}

/// Labeled range slider controlling the sticker size.
#[component]
pub fn SizeSlider(props: SizeSliderProps) -> Element {
    let SizeBounds { min, max } = props.bounds;
    let size = props.size;
    let on_change = props.on_change;

    rsx! {
        div { class: "flex flex-col gap-1 w-64",
            div { class: "flex justify-between text-sm",
                label { r#for: "sticker-size",
                    class: "text-(--text-heading) font-medium",
                    "Sticker size"
                }
                span { class: "text-(--text-secondary) tabular-nums", "{size}px" }
            }
            input {
                r#type: "range",
                id: "sticker-size",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{size}",
                class: "w-full accent-(--btn-primary)",
                oninput: move |e| {
                    match e.value().parse::<u32>() {
                        Ok(v) => on_change.call(v),
                        Err(err) => {
                            tracing::warn!("ignoring unparsable slider value {:?}: {err}", e.value());
                        }
                    }
                },
            }
        }
    }
}
