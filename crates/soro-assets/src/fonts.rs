//! Brand typeface resolution.

use soro_raster::text::{FontId, FontSystem};

/// Candidate files for the brand typeface, in preference order.
///
/// Whichever loads first wins; when none do, the compositor's built-in
/// bitmap face takes over and the artifacts still render.
pub const PREFERRED_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the brand typeface, falling back to the built-in face silently.
pub fn load_brand_font(fonts: &mut FontSystem) -> FontId {
    fonts.load_first_available(PREFERRED_FONTS)
}
