//! The editor model: background, sticker, transform, drag, gallery.
//!
//! Every mutation is an explicit method call, and callers recompute the
//! composite with [`Editor::composite`] afterwards. Nothing here reacts
//! on its own.

use std::rc::Rc;

use image::RgbaImage;

use crate::compositor;
use crate::config::EditorConfig;
use crate::decode::decode_rgba;
use crate::drag::DragController;
use crate::encode;
use crate::gallery::Gallery;
use crate::types::{Dimensions, EditorError, OverlayTransform, Point};

/// Load state of the sticker asset.
#[derive(Debug, Clone, Default)]
pub enum OverlayState {
    /// Not requested yet, or the last attempt failed.
    #[default]
    NotLoaded,
    /// A fetch is in flight.
    Loading,
    /// Decoded and ready to draw.
    Loaded(Rc<RgbaImage>),
}

/// Identifies one upload so a slower, older decode cannot replace the
/// background chosen afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket to `finish_upload`"]
pub struct UploadTicket(u64);

/// What happened to an upload handed to [`Editor::finish_upload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The background was replaced.
    Applied(Dimensions),
    /// A newer upload started in the meantime; the bytes were ignored.
    Stale,
}

/// One editing session.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    background: Option<Rc<RgbaImage>>,
    overlay: OverlayState,
    transform: OverlayTransform,
    drag: DragController,
    gallery: Gallery,
    upload_generation: u64,
}

impl Editor {
    /// Start a session with an empty gallery.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_gallery(config, Gallery::new())
    }

    /// Start a session with a previously persisted gallery.
    #[must_use]
    pub fn with_gallery(config: EditorConfig, gallery: Gallery) -> Self {
        let mut transform = config.initial_transform;
        transform.size = config.size_bounds.clamp(transform.size);
        Self {
            drag: DragController::new(config.drag_mode),
            config,
            background: None,
            overlay: OverlayState::NotLoaded,
            transform,
            gallery,
            upload_generation: 0,
        }
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The current background, if one has been uploaded.
    #[must_use]
    pub fn background(&self) -> Option<&RgbaImage> {
        self.background.as_deref()
    }

    /// Natural dimensions of the current background.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.background().map(Dimensions::of)
    }

    /// Sticker load state.
    #[must_use]
    pub const fn overlay_state(&self) -> &OverlayState {
        &self.overlay
    }

    /// The decoded sticker, if loaded.
    #[must_use]
    pub fn overlay(&self) -> Option<&RgbaImage> {
        match &self.overlay {
            OverlayState::Loaded(img) => Some(img.as_ref()),
            OverlayState::NotLoaded | OverlayState::Loading => None,
        }
    }

    /// Shared handle to the decoded sticker, if loaded.
    #[must_use]
    pub fn sticker(&self) -> Option<Rc<RgbaImage>> {
        match &self.overlay {
            OverlayState::Loaded(img) => Some(Rc::clone(img)),
            OverlayState::NotLoaded | OverlayState::Loading => None,
        }
    }

    /// Current sticker placement.
    #[must_use]
    pub const fn transform(&self) -> OverlayTransform {
        self.transform
    }

    /// Saved composites, newest first.
    #[must_use]
    pub const fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // --- Background ---

    /// Register a new upload. Any upload started earlier becomes stale.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.upload_generation += 1;
        UploadTicket(self.upload_generation)
    }

    /// Whether `ticket` belongs to the most recently started upload.
    #[must_use]
    pub const fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.upload_generation
    }

    /// Decode `bytes` and make them the background, unless a newer upload
    /// has started since `ticket` was issued.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EmptyInput`] or [`EditorError::ImageDecode`]
    /// if the bytes cannot be decoded; the previous background is kept.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        bytes: &[u8],
    ) -> Result<UploadOutcome, EditorError> {
        if !self.is_current(ticket) {
            return Ok(UploadOutcome::Stale);
        }
        let image = decode_rgba(bytes)?;
        let dimensions = Dimensions::of(&image);
        self.background = Some(Rc::new(image));
        Ok(UploadOutcome::Applied(dimensions))
    }

    /// Replace the background in one step (no concurrent uploads).
    ///
    /// # Errors
    ///
    /// Same as [`Editor::finish_upload`].
    pub fn load_background(&mut self, bytes: &[u8]) -> Result<Dimensions, EditorError> {
        let ticket = self.begin_upload();
        match self.finish_upload(ticket, bytes)? {
            UploadOutcome::Applied(dimensions) => Ok(dimensions),
            UploadOutcome::Stale => Err(EditorError::NoBackground),
        }
    }

    // --- Sticker ---

    /// Ask for the sticker to be loaded.
    ///
    /// Returns `true` if the caller should start fetching it. Requests
    /// while a fetch is in flight or after a successful load are no-ops.
    pub fn request_overlay(&mut self) -> bool {
        if matches!(self.overlay, OverlayState::NotLoaded) {
            self.overlay = OverlayState::Loading;
            true
        } else {
            false
        }
    }

    /// Decode fetched sticker bytes.
    ///
    /// # Errors
    ///
    /// Returns the decode error and resets the state to
    /// [`OverlayState::NotLoaded`] so a later request retries.
    pub fn finish_overlay(&mut self, bytes: &[u8]) -> Result<(), EditorError> {
        match decode_rgba(bytes) {
            Ok(image) => {
                self.set_overlay(image);
                Ok(())
            }
            Err(e) => {
                self.overlay = OverlayState::NotLoaded;
                Err(e)
            }
        }
    }

    /// The fetch failed before any bytes arrived.
    pub fn overlay_failed(&mut self) {
        self.overlay = OverlayState::NotLoaded;
    }

    /// Install an already-decoded sticker.
    pub fn set_overlay(&mut self, image: RgbaImage) {
        self.overlay = OverlayState::Loaded(Rc::new(image));
    }

    // --- Transform ---

    /// Set the sticker edge length, clamped to the configured bounds.
    ///
    /// Returns the size actually applied.
    pub fn set_size(&mut self, size: u32) -> u32 {
        self.transform.size = self.config.size_bounds.clamp(size);
        self.transform.size
    }

    /// Move the sticker's top-left corner.
    pub fn set_position(&mut self, position: Point) {
        self.transform.position = position;
    }

    /// Pointer or touch pressed on the sticker.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag.press(pointer, self.transform.position);
    }

    /// Pointer or touch moved over the drop target.
    ///
    /// Returns `true` if the sticker moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        match self.drag.drag_to(pointer, self.transform.position) {
            Some(next) if next != self.transform.position => {
                self.transform.position = next;
                true
            }
            _ => false,
        }
    }

    /// Where a move to `pointer` would put the sticker, or `None` when
    /// no drag is active or the sticker would stay where it is.
    #[must_use]
    pub fn move_target(&self, pointer: Point) -> Option<Point> {
        self.drag
            .target(pointer, self.transform.position)
            .filter(|next| *next != self.transform.position)
    }

    /// Pointer released, left the drop target, or touch ended.
    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    // --- Output ---

    /// Render the current composite, or `None` before any upload.
    #[must_use]
    pub fn composite(&self) -> Option<RgbaImage> {
        self.background()
            .map(|bg| compositor::composite(bg, self.overlay(), self.transform))
    }

    /// Image for the editing stage.
    ///
    /// While a drag is in progress this is the bare background, shared
    /// rather than copied, and the front end draws the sticker on top at
    /// the live transform. Otherwise it is the full composite.
    #[must_use]
    pub fn preview(&self) -> Option<Rc<RgbaImage>> {
        let background = self.background.as_ref()?;
        if self.is_dragging() && self.overlay().is_some() {
            Some(Rc::clone(background))
        } else {
            self.composite().map(Rc::new)
        }
    }

    /// Render and PNG-encode the composite.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoBackground`] before any upload, or
    /// [`EditorError::Encode`] if encoding fails.
    pub fn export_png(&self) -> Result<Vec<u8>, EditorError> {
        let canvas = self.composite().ok_or(EditorError::NoBackground)?;
        encode::encode_png(&canvas)
    }

    /// Render the composite as a PNG `data:` URL.
    ///
    /// # Errors
    ///
    /// Same as [`Editor::export_png`].
    pub fn export_data_url(&self) -> Result<String, EditorError> {
        let png = self.export_png()?;
        Ok(encode::to_data_url(&png, encode::PNG_MIME))
    }

    /// Render the composite and prepend it to the gallery.
    ///
    /// Returns the number of old entries evicted by the gallery cap.
    ///
    /// # Errors
    ///
    /// Same as [`Editor::export_png`]; the gallery is unchanged on error.
    pub fn save_to_gallery(&mut self) -> Result<usize, EditorError> {
        let entry = self.export_data_url()?;
        Ok(self.gallery.save(entry, self.config.max_gallery_entries))
    }

    /// Share-intent URL for the configured caption.
    #[must_use]
    pub fn share_url(&self) -> String {
        self.config.share.url()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::drag::DragMode;

    fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        encode::encode_png(&RgbaImage::from_pixel(width, height, Rgba(color))).unwrap()
    }

    #[test]
    fn upload_sets_canvas_dimensions() {
        let mut editor = Editor::default();
        let dims = editor.load_background(&png(64, 48, [0, 0, 0, 255])).unwrap();
        assert_eq!(dims, Dimensions { width: 64, height: 48 });
        assert_eq!(editor.composite().unwrap().dimensions(), (64, 48));
    }

    #[test]
    fn new_upload_replaces_background() {
        let mut editor = Editor::default();
        editor.load_background(&png(10, 10, [0, 0, 0, 255])).unwrap();
        editor.load_background(&png(30, 20, [0, 0, 0, 255])).unwrap();
        assert_eq!(editor.composite().unwrap().dimensions(), (30, 20));
    }

    #[test]
    fn failed_upload_keeps_previous_background() {
        let mut editor = Editor::default();
        editor.load_background(&png(10, 10, [0, 0, 0, 255])).unwrap();
        let err = editor.load_background(b"not an image").unwrap_err();
        assert!(matches!(err, EditorError::ImageDecode(_)));
        assert_eq!(editor.dimensions(), Some(Dimensions { width: 10, height: 10 }));
    }

    #[test]
    fn stale_upload_is_discarded() {
        let mut editor = Editor::default();
        let first = editor.begin_upload();
        let second = editor.begin_upload();

        let outcome = editor.finish_upload(second, &png(20, 20, [0, 0, 0, 255])).unwrap();
        assert_eq!(outcome, UploadOutcome::Applied(Dimensions { width: 20, height: 20 }));

        // The older upload finishes last but must not win.
        let outcome = editor.finish_upload(first, &png(99, 99, [0, 0, 0, 255])).unwrap();
        assert_eq!(outcome, UploadOutcome::Stale);
        assert_eq!(editor.dimensions(), Some(Dimensions { width: 20, height: 20 }));
    }

    #[test]
    fn composite_without_background_is_none() {
        let editor = Editor::default();
        assert!(editor.composite().is_none());
        assert!(matches!(editor.export_png(), Err(EditorError::NoBackground)));
    }

    #[test]
    fn overlay_request_is_idempotent() {
        let mut editor = Editor::default();
        assert!(editor.request_overlay());
        assert!(!editor.request_overlay(), "in-flight request should not refetch");
        editor.finish_overlay(&png(8, 8, [255, 0, 0, 255])).unwrap();
        assert!(!editor.request_overlay(), "loaded sticker should not refetch");
        assert!(editor.overlay().is_some());
    }

    #[test]
    fn failed_overlay_allows_retry() {
        let mut editor = Editor::default();
        assert!(editor.request_overlay());
        assert!(editor.finish_overlay(&[]).is_err());
        assert!(matches!(editor.overlay_state(), OverlayState::NotLoaded));
        assert!(editor.request_overlay());
        editor.overlay_failed();
        assert!(editor.request_overlay());
    }

    #[test]
    fn overlay_only_drawn_once_loaded() {
        let mut editor = Editor::default();
        editor.load_background(&png(200, 200, [0, 0, 0, 255])).unwrap();
        assert!(editor.request_overlay());

        let before = editor.composite().unwrap();
        assert_eq!(*before.get_pixel(60, 60), Rgba([0, 0, 0, 255]));

        editor.finish_overlay(&png(8, 8, [255, 0, 0, 255])).unwrap();
        let after = editor.composite().unwrap();
        assert_eq!(*after.get_pixel(60, 60), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn size_is_clamped_to_slider_range() {
        let mut editor = Editor::default();
        assert_eq!(editor.set_size(10), 50);
        assert_eq!(editor.set_size(300), 300);
        assert_eq!(editor.set_size(1000), 300);
        assert_eq!(editor.transform().size, 300);
    }

    #[test]
    fn drag_moves_sticker_by_pointer_displacement() {
        for mode in [DragMode::Incremental, DragMode::Anchored] {
            let mut editor = Editor::new(EditorConfig {
                drag_mode: mode,
                ..EditorConfig::default()
            });
            editor.pointer_down(Point::new(100, 100));
            assert!(editor.is_dragging());
            assert!(editor.pointer_move(Point::new(110, 95)));
            assert!(editor.pointer_move(Point::new(130, 70)));
            editor.pointer_up();
            assert!(!editor.is_dragging());
            assert!(!editor.pointer_move(Point::new(0, 0)));
            assert_eq!(editor.transform().position, Point::new(80, 20), "{mode:?}");
        }
    }

    #[test]
    fn save_prepends_composite_to_gallery() {
        let mut editor = Editor::with_gallery(
            EditorConfig::default(),
            Gallery::from_entries(vec!["older".into()]),
        );
        editor.load_background(&png(4, 4, [1, 2, 3, 255])).unwrap();
        assert_eq!(editor.save_to_gallery().unwrap(), 0);
        assert_eq!(editor.gallery().len(), 2);
        assert!(editor.gallery().entries()[0].starts_with("data:image/png;base64,"));
        assert_eq!(editor.gallery().entries()[1], "older");
    }

    #[test]
    fn move_target_reports_only_real_moves() {
        let mut editor = Editor::default();
        assert_eq!(editor.move_target(Point::new(5, 5)), None);

        editor.pointer_down(Point::new(60, 60));
        assert_eq!(editor.move_target(Point::new(60, 60)), None);
        assert_eq!(editor.move_target(Point::new(70, 65)), Some(Point::new(60, 55)));
        // Asking does not move the sticker.
        assert_eq!(editor.transform().position, Point::new(50, 50));
    }

    #[test]
    fn preview_shares_background_while_dragging() {
        let mut editor = Editor::default();
        assert!(editor.preview().is_none());
        editor.load_background(&png(200, 200, [0, 0, 255, 255])).unwrap();
        editor.set_overlay(RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255])));

        let at_rest = editor.preview().unwrap();
        assert_eq!(at_rest.get_pixel(60, 60).0, [255, 0, 0, 255]);

        editor.pointer_down(Point::new(60, 60));
        let first = editor.preview().unwrap();
        assert!(editor.pointer_move(Point::new(160, 160)));
        let second = editor.preview().unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.get_pixel(60, 60).0, [0, 0, 255, 255]);

        editor.pointer_up();
        let dropped = editor.preview().unwrap();
        assert_eq!(dropped.get_pixel(160, 160).0, [255, 0, 0, 255]);
        assert_eq!(dropped.get_pixel(60, 60).0, [0, 0, 255, 255]);
    }

    #[test]
    fn default_gallery_grows_without_eviction() {
        let existing: Vec<String> = (0..24).map(|i| format!("entry-{i}")).collect();
        let mut editor =
            Editor::with_gallery(EditorConfig::default(), Gallery::from_entries(existing));
        editor.load_background(&png(4, 4, [1, 2, 3, 255])).unwrap();

        assert_eq!(editor.save_to_gallery().unwrap(), 0);
        assert_eq!(editor.gallery().len(), 25);
        assert!(editor.gallery().entries()[0].starts_with("data:image/png;base64,"));
        assert_eq!(editor.gallery().entries()[24], "entry-23");
    }

    #[test]
    fn save_without_background_leaves_gallery() {
        let mut editor = Editor::default();
        assert!(editor.save_to_gallery().is_err());
        assert!(editor.gallery().is_empty());
    }

    #[test]
    fn initial_size_outside_bounds_is_clamped() {
        let editor = Editor::new(EditorConfig {
            initial_transform: OverlayTransform::new(0, 0, 5),
            ..EditorConfig::default()
        });
        assert_eq!(editor.transform().size, 50);
    }
}
