//! newface-compose: put the NewFace sticker on an image without a browser.
//!
//! Runs the same decode, composite, and encode steps as the web app,
//! optionally appending the result to a gallery JSON file in the format
//! the app keeps in local storage.
//!
//! # Usage
//!
//! ```text
//! newface-compose photo.jpg -o meme.png --x 120 --y 40 --size 180
//! newface-compose photo.jpg --data-url --gallery saved.json
//! ```

#![allow(clippy::print_stdout)]

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info, warn};
use newface_core::{Editor, EditorConfig, Gallery};

/// The web app's sticker, used when `--overlay` is not given.
const BUILTIN_STICKER: &[u8] = include_bytes!("../../newface/assets/newface.png");

/// Composite the NewFace sticker onto a background image.
#[derive(Parser, Debug)]
#[command(name = "newface-compose", version)]
struct Cli {
    /// Background image (PNG, JPEG, BMP, WebP, GIF).
    background: PathBuf,

    /// Sticker image [default: the built-in NewFace sticker].
    #[arg(long, value_name = "PATH")]
    overlay: Option<PathBuf>,

    /// Editor configuration as JSON; flags below override it.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Sticker left edge in pixels (may be negative) [default: 50].
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i32>,

    /// Sticker top edge in pixels (may be negative) [default: 50].
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i32>,

    /// Sticker edge length in pixels, clamped to the configured range
    /// [default: 100].
    #[arg(long)]
    size: Option<u32>,

    /// Write the composite as PNG to this path.
    #[arg(short, long, required_unless_present_any = ["data_url", "gallery"])]
    output: Option<PathBuf>,

    /// Print the composite as a `data:image/png;base64,...` URL.
    #[arg(long)]
    data_url: bool,

    /// Prepend the composite to this gallery JSON file (created if missing).
    #[arg(long, value_name = "PATH")]
    gallery: Option<PathBuf>,

    /// Gallery cap; the oldest entries are dropped past it. `0` means
    /// unbounded [default: from config].
    #[arg(long)]
    max_entries: Option<usize>,
}

/// Load `--config` or fall back to defaults, then apply flag overrides.
fn resolve_config(cli: &Cli) -> Result<EditorConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            serde_json::from_str::<EditorConfig>(&json)
                .map_err(|e| format!("--config {}: {e}", path.display()))?
        }
        None => EditorConfig::default(),
    };

    if let Some(x) = cli.x {
        config.initial_transform.position.x = x;
    }
    if let Some(y) = cli.y {
        config.initial_transform.position.y = y;
    }
    if let Some(size) = cli.size {
        config.initial_transform.size = size;
    }
    if let Some(cap) = cli.max_entries {
        config.max_gallery_entries = (cap > 0).then_some(cap);
    }
    Ok(config)
}

/// Read a gallery file, treating a missing file as an empty gallery.
fn read_gallery(path: &Path) -> Result<Gallery, Box<dyn Error>> {
    match std::fs::read_to_string(path) {
        Ok(json) => Ok(Gallery::from_json(&json)
            .map_err(|e| format!("gallery {}: {e}", path.display()))?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Gallery::new()),
        Err(e) => Err(e.into()),
    }
}

/// Run one composite. Returns the data URL when `--data-url` was given.
fn run(cli: &Cli) -> Result<Option<String>, Box<dyn Error>> {
    let config = resolve_config(cli)?;
    let requested = config.initial_transform;

    let mut editor = match &cli.gallery {
        Some(path) => Editor::with_gallery(config, read_gallery(path)?),
        None => Editor::new(config),
    };

    if editor.transform().size != requested.size {
        warn!(
            "size {} outside {}..={}, using {}",
            requested.size,
            editor.config().size_bounds.min,
            editor.config().size_bounds.max,
            editor.transform().size,
        );
    }

    info!("Reading background from {}", cli.background.display());
    let dims = editor.load_background(&std::fs::read(&cli.background)?)?;
    debug!("background is {}x{}", dims.width, dims.height);

    let sticker = match &cli.overlay {
        Some(path) => {
            info!("Reading sticker from {}", path.display());
            std::fs::read(path)?
        }
        None => {
            debug!("using the built-in sticker");
            BUILTIN_STICKER.to_vec()
        }
    };
    if editor.request_overlay() {
        editor.finish_overlay(&sticker)?;
    }

    let t = editor.transform();
    info!(
        "Compositing {}px sticker at ({}, {})",
        t.size, t.position.x, t.position.y
    );

    if let Some(output) = &cli.output {
        std::fs::write(output, editor.export_png()?)?;
        info!("Saved to {}", output.display());
    }

    if let Some(path) = &cli.gallery {
        let evicted = editor.save_to_gallery()?;
        if evicted > 0 {
            info!("Gallery full, dropped {evicted} oldest");
        }
        std::fs::write(path, editor.gallery().to_json()?)?;
        info!(
            "Gallery {} now has {} entries",
            path.display(),
            editor.gallery().len()
        );
    }

    if cli.data_url {
        Ok(Some(editor.export_data_url()?))
    } else {
        Ok(None)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Some(url) = run(&cli)? {
        println!("{url}");
    }
    Ok(())
}
