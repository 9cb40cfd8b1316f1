//! Integration test: drive a whole editing session through the public API,
//! then reload the persisted gallery as a fresh page load would.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use image::{Rgba, RgbaImage};
use newface_core::encode::{data_url_bytes, encode_png};
use newface_core::{Editor, EditorConfig, Gallery, Point};

fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    encode_png(&RgbaImage::from_pixel(width, height, Rgba(color))).unwrap()
}

#[test]
fn upload_drag_resize_save_and_reload() {
    let config = EditorConfig::default();
    let mut editor = Editor::new(config.clone());

    editor
        .load_background(&png(320, 240, [0, 0, 255, 255]))
        .expect("background should decode");
    assert!(editor.request_overlay());
    editor
        .finish_overlay(&png(16, 16, [255, 0, 0, 255]))
        .expect("sticker should decode");

    // Grab the sticker and drag it 40px right, 30px down in five steps.
    editor.pointer_down(Point::new(60, 60));
    for step in 1..=5 {
        editor.pointer_move(Point::new(60 + step * 8, 60 + step * 6));
    }
    editor.pointer_up();
    assert_eq!(editor.transform().position, Point::new(90, 80));

    assert_eq!(editor.set_size(50), 50);

    let canvas = editor.composite().expect("background is loaded");
    assert_eq!(canvas.dimensions(), (320, 240));
    assert_eq!(*canvas.get_pixel(90, 80), Rgba([255, 0, 0, 255]));
    assert_eq!(*canvas.get_pixel(139, 129), Rgba([255, 0, 0, 255]));
    assert_eq!(*canvas.get_pixel(140, 130), Rgba([0, 0, 255, 255]));
    assert_eq!(*canvas.get_pixel(89, 80), Rgba([0, 0, 255, 255]));

    editor.save_to_gallery().unwrap();
    editor.set_size(300);
    editor.save_to_gallery().unwrap();
    assert_eq!(editor.gallery().len(), 2);

    // Persist, then start a new session from the stored JSON.
    let stored = editor.gallery().to_json().unwrap();
    let restored = Gallery::from_json(&stored).unwrap();
    assert_eq!(restored.entries(), editor.gallery().entries());

    let reloaded = Editor::with_gallery(config, restored);
    let newest = data_url_bytes(&reloaded.gallery().entries()[0]).unwrap();
    let newest = image::load_from_memory(&newest).unwrap().to_rgba8();
    assert_eq!(newest.dimensions(), (320, 240));
    // The 300px sticker covers (90..390, 80..380), clipped to the canvas.
    assert_eq!(*newest.get_pixel(319, 239), Rgba([255, 0, 0, 255]));
}

#[test]
fn gallery_cap_evicts_oldest_across_saves() {
    let config = EditorConfig {
        max_gallery_entries: Some(2),
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(config);
    editor.load_background(&png(8, 8, [0, 0, 0, 255])).unwrap();

    let mut evicted = 0;
    for _ in 0..5 {
        evicted += editor.save_to_gallery().unwrap();
    }
    assert_eq!(editor.gallery().len(), 2);
    assert_eq!(evicted, 3);
}

#[test]
fn share_url_does_not_depend_on_canvas() {
    let editor = Editor::default();
    assert_eq!(
        editor.share_url(),
        "https://twitter.com/intent/tweet?text=Check+out+my+%23NewFace+meme!&hashtags=NewFace"
    );
}
