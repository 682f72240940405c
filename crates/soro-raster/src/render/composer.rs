use std::fmt;

use crate::paint::Paint;
use crate::scene::DrawList;
use crate::text::FontSystem;

use super::{shapes, Canvas};

/// Error returned by [`compose`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeError {
    /// Canvas dimensions must both be positive.
    InvalidSize { width: u32, height: u32 },
    /// Background paint is structurally unusable (non-finite color,
    /// degenerate gradient).
    InvalidBackground,
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
            ComposeError::InvalidBackground => write!(f, "invalid background paint"),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Composes a layered raster image.
///
/// Initializes a `width` × `height` canvas from `background` (solid color or
/// linear gradient), then applies each recorded operation in paint order:
/// the operation rasterizes into a transparent scratch layer, and the layer
/// is alpha-composited over the accumulating canvas with the "over"
/// operator. The returned canvas is flattened to fully opaque alpha.
///
/// An empty draw list yields the background alone. Disk output is a separate
/// step ([`Canvas::save_png`]).
pub fn compose(
    width: u32,
    height: u32,
    background: &Paint,
    list: &mut DrawList,
    fonts: &FontSystem,
) -> Result<Canvas, ComposeError> {
    if width == 0 || height == 0 {
        return Err(ComposeError::InvalidSize { width, height });
    }
    if !background.is_valid() {
        return Err(ComposeError::InvalidBackground);
    }

    let mut canvas = Canvas::filled(width, height, background);

    // One scratch layer reused across operations.
    let mut layer = Canvas::transparent(width, height);
    for item in list.iter_in_paint_order() {
        layer.clear_transparent();
        shapes::raster(&item.cmd, &mut layer, fonts);
        canvas.composite_over(&layer);
    }

    Ok(canvas.flattened_opaque())
}
