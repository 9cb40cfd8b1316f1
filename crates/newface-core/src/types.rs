//! Shared types for the NewFace editor model.

use serde::{Deserialize, Serialize};

/// Re-export `RgbaImage` so downstream crates can hold decoded rasters
/// without depending on `image` directly.
pub use image::RgbaImage;

/// A 2D point in canvas (or pointer) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: i32,
    /// Vertical position (pixels from top edge).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    ///
    /// Saturates instead of overflowing so pathological pointer
    /// coordinates cannot panic in debug builds.
    #[must_use]
    pub const fn offset_from(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }

    /// Component-wise sum, saturating at the `i32` range.
    #[must_use]
    pub const fn translate(self, delta: Self) -> Self {
        Self {
            x: self.x.saturating_add(delta.x),
            y: self.y.saturating_add(delta.y),
        }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions of a decoded raster.
    #[must_use]
    pub fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Inclusive range allowed for the sticker edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    /// Smallest edge length in pixels.
    pub min: u32,
    /// Largest edge length in pixels.
    pub max: u32,
}

impl SizeBounds {
    /// Clamp `size` into `[min, max]`.
    ///
    /// A bounds value with `min > max` (only reachable through a hand-written
    /// config) clamps to `min`.
    #[must_use]
    pub const fn clamp(self, size: u32) -> u32 {
        if size < self.min || self.min > self.max {
            self.min
        } else if size > self.max {
            self.max
        } else {
            size
        }
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self { min: 50, max: 300 }
    }
}

/// Where and how large the sticker is drawn on the canvas.
///
/// The sticker is always square: `size` is both its width and height.
/// Position is not clamped, so the sticker may sit partly or fully
/// outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayTransform {
    /// Top-left corner of the sticker in canvas pixels.
    pub position: Point,
    /// Edge length of the sticker in pixels.
    pub size: u32,
}

impl OverlayTransform {
    /// Create a transform at `(x, y)` with edge length `size`.
    #[must_use]
    pub const fn new(x: i32, y: i32, size: u32) -> Self {
        Self {
            position: Point::new(x, y),
            size,
        }
    }
}

impl Default for OverlayTransform {
    fn default() -> Self {
        Self::new(50, 50, 100)
    }
}

/// Errors raised by the editor model.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The selected file contained no bytes.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode an uploaded or fetched image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Failed to encode the composite.
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// An export was requested before any background was uploaded.
    #[error("no background image loaded")]
    NoBackground,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_offset_and_translate_are_inverse() {
        let a = Point::new(10, -4);
        let b = Point::new(3, 7);
        assert_eq!(b.translate(a.offset_from(b)), a);
    }

    #[test]
    fn point_arithmetic_saturates() {
        let far = Point::new(i32::MAX, i32::MIN);
        assert_eq!(far.translate(Point::new(1, -1)), far);
    }

    #[test]
    fn size_bounds_clamp() {
        let bounds = SizeBounds::default();
        assert_eq!(bounds.clamp(10), 50);
        assert_eq!(bounds.clamp(50), 50);
        assert_eq!(bounds.clamp(120), 120);
        assert_eq!(bounds.clamp(300), 300);
        assert_eq!(bounds.clamp(999), 300);
    }

    #[test]
    fn inverted_bounds_clamp_to_min() {
        let bounds = SizeBounds { min: 200, max: 100 };
        assert_eq!(bounds.clamp(150), 200);
    }

    #[test]
    fn default_transform_matches_editor_start() {
        let t = OverlayTransform::default();
        assert_eq!(t.position, Point::new(50, 50));
        assert_eq!(t.size, 100);
    }

    #[test]
    fn dimensions_of_image() {
        let img = RgbaImage::new(7, 3);
        assert_eq!(
            Dimensions::of(&img),
            Dimensions {
                width: 7,
                height: 3
            }
        );
    }
}
