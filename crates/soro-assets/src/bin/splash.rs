//! Generates the splash screen.
//!
//! Writes `assets/splash.png` relative to the working directory,
//! overwriting an existing file. Any failure propagates and exits
//! non-zero.

use anyhow::Context;

use soro_assets::{artwork, fonts};
use soro_raster::logging::{init_logging, LoggingConfig};
use soro_raster::text::FontSystem;

const SPLASH_PATH: &str = "assets/splash.png";

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut font_system = FontSystem::new();
    let brand = fonts::load_brand_font(&mut font_system);

    log::info!(
        "rendering {}x{} splash screen",
        artwork::SPLASH_WIDTH,
        artwork::SPLASH_HEIGHT
    );
    let splash = artwork::splash(&font_system, brand)?;
    splash
        .save_png(SPLASH_PATH)
        .with_context(|| format!("writing {SPLASH_PATH}"))?;
    println!("Splash screen written to {SPLASH_PATH}");

    Ok(())
}
