use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::Canvas;
use crate::scene::shapes::text::{TextCmd, TextOrigin};
use crate::text::{builtin, FontFace, FontSystem};

/// Rasterizer for `DrawCmd::Text`.
///
/// Glyph coverage blends straight into the layer, so no atlas or glyph
/// cache is involved. The shadow run, when present, is rasterized before
/// the main run so it always sits beneath it.
pub(super) fn raster(cmd: &TextCmd, layer: &mut Canvas, fonts: &FontSystem) {
    if cmd.text.is_empty() {
        return;
    }

    let origin = resolve_origin(cmd, layer.width(), fonts);

    if let Some(shadow) = &cmd.shadow {
        draw_run(layer, fonts, cmd, origin + shadow.offset, shadow.color);
    }
    draw_run(layer, fonts, cmd, origin, cmd.color);
}

/// Resolves the top-left pen origin, measuring the run for centered text:
/// `origin_x = (canvas_width - text_width) / 2`.
fn resolve_origin(cmd: &TextCmd, canvas_width: u32, fonts: &FontSystem) -> Vec2 {
    match cmd.origin {
        TextOrigin::TopLeft(p) => p,
        TextOrigin::CenteredH { y } => {
            let width = fonts.measure_text(&cmd.text, cmd.font, cmd.size).x;
            Vec2::new((canvas_width as f32 - width) / 2.0, y)
        }
    }
}

fn draw_run(layer: &mut Canvas, fonts: &FontSystem, cmd: &TextCmd, origin: Vec2, color: Color) {
    match fonts.face(cmd.font) {
        FontFace::Ttf(font) => {
            let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
            layout.reset(&LayoutSettings {
                x: origin.x,
                y: origin.y,
                ..LayoutSettings::default()
            });
            layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

            for glyph in layout.glyphs() {
                if glyph.width == 0 || glyph.height == 0 {
                    continue;
                }
                let (metrics, coverage) = font.rasterize_config(glyph.key);
                blend_bitmap(layer, glyph.x, glyph.y, metrics.width, &coverage, color);
            }
        }
        FontFace::Builtin => {
            let advance = builtin::advance(cmd.size);
            let mut pen_x = origin.x;
            for ch in cmd.text.chars() {
                let glyph = builtin::rasterize(ch, cmd.size);
                blend_bitmap(layer, pen_x, origin.y, glyph.width, &glyph.coverage, color);
                pen_x += advance;
            }
        }
    }
}

/// Blends a coverage bitmap (row-major, one byte per pixel) at (`x`, `y`),
/// clipping to the layer.
fn blend_bitmap(layer: &mut Canvas, x: f32, y: f32, width: usize, coverage: &[u8], color: Color) {
    if width == 0 {
        return;
    }
    let height = coverage.len() / width;
    let left = x.round() as i64;
    let top = y.round() as i64;
    let canvas_w = layer.width() as i64;
    let canvas_h = layer.height() as i64;

    for row in 0..height {
        let py = top + row as i64;
        if py < 0 || py >= canvas_h {
            continue;
        }
        for col in 0..width {
            let cov = coverage[row * width + col];
            if cov == 0 {
                continue;
            }
            let px = left + col as i64;
            if px < 0 || px >= canvas_w {
                continue;
            }
            layer.blend_pixel(px as u32, py as u32, color.scaled(cov as f32 / 255.0));
        }
    }
}
