//! Shared rasterization helpers used by all shape rasterizers.

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::render::Canvas;

/// Coverage of a pixel whose center sits at signed distance `d` from the
/// shape edge: a one-pixel linear ramp centered on the edge.
#[inline]
pub(crate) fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Integer pixel span [lo, hi) covering `[min, max]` inflated by one pixel
/// for the antialiasing ramp, clamped to `extent`. `None` when nothing of
/// the shape lands on the canvas.
fn pixel_span(min: f32, max: f32, extent: u32) -> Option<(u32, u32)> {
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    let lo = (min - 1.0).floor().max(0.0) as u32;
    let hi = ((max + 1.0).ceil().max(0.0) as u32).min(extent);
    if lo >= hi { None } else { Some((lo, hi)) }
}

/// Fills the region where `sdf` is negative, sampling paint per pixel.
pub(super) fn fill(layer: &mut Canvas, bounds: Rect, paint: &Paint, sdf: impl Fn(Vec2) -> f32) {
    let b = bounds.normalized();
    let Some((x0, x1)) = pixel_span(b.min().x, b.max().x, layer.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(b.min().y, b.max().y, layer.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let cov = coverage(sdf(p));
            if cov <= 0.0 {
                continue;
            }
            layer.blend_pixel(x, y, paint.eval(p).scaled(cov));
        }
    }
}

/// Strokes a ring of `width` pixels along the outer edge of the shape
/// (the band where `sdf` is in `[-width, 0]`).
pub(super) fn stroke(
    layer: &mut Canvas,
    bounds: Rect,
    color: Color,
    width: f32,
    sdf: impl Fn(Vec2) -> f32,
) {
    if width <= 0.0 {
        return;
    }
    let b = bounds.normalized();
    let Some((x0, x1)) = pixel_span(b.min().x, b.max().x, layer.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(b.min().y, b.max().y, layer.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = sdf(p);
            // Ring coverage: inside the outer edge minus inside the inset edge.
            let cov = coverage(d) - coverage(d + width);
            if cov <= 0.0 {
                continue;
            }
            layer.blend_pixel(x, y, color.scaled(cov));
        }
    }
}
