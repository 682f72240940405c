//! Generates the app icon and adaptive icon.
//!
//! Writes `assets/icon.png` and `assets/adaptive-icon.png` relative to the
//! working directory, overwriting existing files. Any failure propagates
//! and exits non-zero.

use anyhow::Context;

use soro_assets::{artwork, fonts};
use soro_raster::logging::{init_logging, LoggingConfig};
use soro_raster::text::FontSystem;

const ICON_PATH: &str = "assets/icon.png";
const ADAPTIVE_ICON_PATH: &str = "assets/adaptive-icon.png";

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut font_system = FontSystem::new();
    let brand = fonts::load_brand_font(&mut font_system);

    log::info!("rendering {}x{} icons", artwork::ICON_SIZE, artwork::ICON_SIZE);
    let icon = artwork::app_icon(&font_system, brand)?;
    icon.save_png(ICON_PATH)
        .with_context(|| format!("writing {ICON_PATH}"))?;
    println!("Icon written to {ICON_PATH}");

    let adaptive = artwork::adaptive_icon(&font_system, brand)?;
    adaptive
        .save_png(ADAPTIVE_ICON_PATH)
        .with_context(|| format!("writing {ADAPTIVE_ICON_PATH}"))?;
    println!("Adaptive icon written to {ADAPTIVE_ICON_PATH}");

    Ok(())
}
