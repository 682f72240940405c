//! SoroOne brand colors.

use soro_raster::paint::Color;

/// Top of the brand gradient (#3B82F6).
pub fn gradient_top() -> Color {
    Color::from_srgb_u8(59, 130, 246, 255)
}

/// Bottom of the brand gradient (#1E40AF).
pub fn gradient_bottom() -> Color {
    Color::from_srgb_u8(30, 64, 175, 255)
}

/// Primary brand blue, used for solid fills.
pub fn brand_blue() -> Color {
    gradient_top()
}

/// Translucent white wash behind the icon foreground.
pub fn overlay_white() -> Color {
    Color::from_srgb_u8(255, 255, 255, 25)
}

/// Chart bar colors: blue, green, amber, red.
pub fn chart_bars() -> [Color; 4] {
    [
        Color::from_srgb_u8(96, 165, 250, 255),
        Color::from_srgb_u8(52, 211, 153, 255),
        Color::from_srgb_u8(251, 191, 36, 255),
        Color::from_srgb_u8(248, 113, 113, 255),
    ]
}

/// Glyph fill on dark backgrounds.
pub fn glyph_white() -> Color {
    Color::from_srgb_u8(255, 255, 255, 255)
}

/// Soft black for glyph drop shadows; `alpha` is the straight byte value.
pub fn shadow_black(alpha: u8) -> Color {
    Color::from_srgb_u8(0, 0, 0, alpha)
}

/// Muted white for secondary text.
pub fn title_white() -> Color {
    Color::from_srgb_u8(255, 255, 255, 200)
}
