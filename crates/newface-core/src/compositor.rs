//! Background + sticker compositing.
//!
//! The composite is a pure function of its inputs. Callers recompute it
//! after every change to the background, the sticker, or the transform.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::types::OverlayTransform;

/// Resampling filter used when scaling the sticker.
///
/// Bilinear, the same quality browsers use for a default `drawImage`.
pub const STICKER_FILTER: FilterType = FilterType::Triangle;

/// Draw `background`, then `overlay` (if any) at `transform`.
///
/// The returned canvas always has the background's natural dimensions.
/// The sticker is scaled to `size × size`, alpha-blended over the
/// background, and clipped to the canvas; negative positions and
/// positions past the right/bottom edge are allowed. A zero `size`
/// draws nothing.
#[must_use]
pub fn composite(
    background: &RgbaImage,
    overlay: Option<&RgbaImage>,
    transform: OverlayTransform,
) -> RgbaImage {
    let mut canvas = background.clone();

    if let Some(sticker) = overlay
        && transform.size > 0
    {
        let scaled = scale_sticker(sticker, transform.size);
        imageops::overlay(
            &mut canvas,
            &scaled,
            i64::from(transform.position.x),
            i64::from(transform.position.y),
        );
    }

    canvas
}

/// Scale the sticker to a `size × size` square.
///
/// Skips resampling when the sticker already has the requested size.
fn scale_sticker(sticker: &RgbaImage, size: u32) -> RgbaImage {
    if sticker.dimensions() == (size, size) {
        sticker.clone()
    } else {
        imageops::resize(sticker, size, size, STICKER_FILTER)
    }
}
