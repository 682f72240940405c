//! The three SoroOne artifacts as draw lists.
//!
//! Layout numbers are the brand layouts, not derived values; each builder
//! records its operations back-to-front and hands the list to the
//! compositor.

use soro_raster::coords::{Rect, Vec2};
use soro_raster::paint::{Color, LinearGradient, Paint};
use soro_raster::render::{compose, Canvas, ComposeError};
use soro_raster::scene::shapes::TextShadow;
use soro_raster::scene::{DrawList, ZIndex};
use soro_raster::text::{FontId, FontSystem};

use crate::palette;

/// App icon and adaptive icon edge length.
pub const ICON_SIZE: u32 = 1024;

/// Splash screen dimensions (iPhone 12 Pro Max resolution).
pub const SPLASH_WIDTH: u32 = 1284;
pub const SPLASH_HEIGHT: u32 = 2778;

/// The app title rendered on the splash screen.
pub const APP_TITLE: &str = "SoroOne";

fn brand_gradient(height: u32) -> Paint {
    Paint::LinearGradient(LinearGradient::vertical(
        height as f32,
        palette::gradient_top(),
        palette::gradient_bottom(),
    ))
}

/// Main app icon: brand gradient, white wash, chart bars, "S" monogram.
pub fn app_icon(fonts: &FontSystem, brand: FontId) -> Result<Canvas, ComposeError> {
    let size = ICON_SIZE as f32;
    let mut list = DrawList::new();

    // Soft white panel behind the foreground.
    list.push_solid_rounded_rect(
        ZIndex::new(1),
        Rect::new(80.0, 80.0, size - 160.0, size - 160.0),
        150.0,
        palette::overlay_white(),
    );

    // Chart bars, bottoms aligned at y = 700.
    let bar_colors = palette::chart_bars();
    let bars = [(200.0, 300.0), (350.0, 450.0), (500.0, 250.0), (650.0, 380.0)];
    for (i, (x, height)) in bars.into_iter().enumerate() {
        list.push_solid_rounded_rect(
            ZIndex::new(2),
            Rect::new(x, 700.0 - height, 120.0, height),
            15.0,
            bar_colors[i],
        );
    }

    // Monogram, centered in the 320px band above the bars.
    let glyph_size = 280.0;
    let glyph_height = fonts.measure_text("S", brand, glyph_size).y;
    list.push_text_centered(
        ZIndex::new(3),
        "S",
        brand,
        glyph_size,
        palette::glyph_white(),
        (320.0 - glyph_height) / 2.0,
        Some(TextShadow::new(Vec2::new(5.0, 5.0), palette::shadow_black(100))),
    );

    compose(ICON_SIZE, ICON_SIZE, &brand_gradient(ICON_SIZE), &mut list, fonts)
}

/// Adaptive icon: brand-blue disc with the "S" monogram.
///
/// Composed on an opaque white background: canvases always flatten to
/// full alpha, so the disc's surround is white rather than transparent.
pub fn adaptive_icon(fonts: &FontSystem, brand: FontId) -> Result<Canvas, ComposeError> {
    let size = ICON_SIZE as f32;
    let mut list = DrawList::new();

    list.push_solid_circle(
        ZIndex::new(1),
        Vec2::new(size / 2.0, size / 2.0),
        size / 2.0 - 112.0,
        palette::brand_blue(),
    );

    let glyph_size = 250.0;
    let glyph_height = fonts.measure_text("S", brand, glyph_size).y;
    list.push_text_centered(
        ZIndex::new(2),
        "S",
        brand,
        glyph_size,
        palette::glyph_white(),
        (size - glyph_height) / 2.0,
        None,
    );

    compose(
        ICON_SIZE,
        ICON_SIZE,
        &Paint::Solid(Color::white()),
        &mut list,
        fonts,
    )
}

/// Splash screen: brand gradient, centered "S" monogram, app title below.
pub fn splash(fonts: &FontSystem, brand: FontId) -> Result<Canvas, ComposeError> {
    let height = SPLASH_HEIGHT as f32;
    let mut list = DrawList::new();

    let glyph_size = 400.0;
    let glyph_height = fonts.measure_text("S", brand, glyph_size).y;
    let glyph_y = (height - glyph_height) / 2.0;
    list.push_text_centered(
        ZIndex::new(1),
        "S",
        brand,
        glyph_size,
        palette::glyph_white(),
        glyph_y,
        Some(TextShadow::new(Vec2::new(8.0, 8.0), palette::shadow_black(80))),
    );

    list.push_text_centered(
        ZIndex::new(1),
        APP_TITLE,
        brand,
        80.0,
        palette::title_white(),
        glyph_y + glyph_height + 100.0,
        None,
    );

    compose(
        SPLASH_WIDTH,
        SPLASH_HEIGHT,
        &brand_gradient(SPLASH_HEIGHT),
        &mut list,
        fonts,
    )
}
