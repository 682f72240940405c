use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Placement of a text block on the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextOrigin {
    /// Explicit top-left corner.
    TopLeft(Vec2),
    /// Horizontally centered on the canvas, top edge at `y`.
    ///
    /// The horizontal origin is resolved at raster time from the measured
    /// text width: `(canvas_width - text_width) / 2`.
    CenteredH { y: f32 },
}

/// Drop shadow for a text block.
///
/// The shadow is the same glyph run offset by `offset`, filled with `color`
/// (typically a reduced-alpha black), and rasterized strictly before the
/// main run so it sits beneath it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextShadow {
    pub offset: Vec2,
    pub color: Color,
}

impl TextShadow {
    #[inline]
    pub fn new(offset: Vec2, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    pub origin: TextOrigin,
    pub shadow: Option<TextShadow>,
}

impl DrawList {
    /// Records a text draw command at an explicit top-left origin.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        shadow: Option<TextShadow>,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin: TextOrigin::TopLeft(origin),
            shadow,
        }));
    }

    /// Records a horizontally centered text draw command with its top edge at `y`.
    pub fn push_text_centered(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        y: f32,
        shadow: Option<TextShadow>,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin: TextOrigin::CenteredH { y },
            shadow,
        }));
    }
}
