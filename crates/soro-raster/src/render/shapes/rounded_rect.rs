use crate::coords::{CornerRadii, Vec2};
use crate::render::Canvas;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;

use super::common;

/// Rasterizer for `DrawCmd::RoundedRect`.
///
/// Supported paints: solid and linear gradient. Borders render as a ring
/// on the outer edge of the shape.
pub(super) fn raster(cmd: &RoundedRectCmd, layer: &mut Canvas) {
    let r = cmd.rect.normalized();
    if r.is_empty() {
        return;
    }

    let half = r.size / 2.0;
    let center = r.center();
    let max_radius = half.x.min(half.y);
    let radii = cmd.radii;

    let sdf = move |p: Vec2| {
        let rad = quadrant_radius(radii, p, center).clamp(0.0, max_radius);
        let qx = (p.x - center.x).abs() - half.x + rad;
        let qy = (p.y - center.y).abs() - half.y + rad;
        let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).length();
        outside + qx.max(qy).min(0.0) - rad
    };

    common::fill(layer, r, &cmd.paint, &sdf);
    if let Some(b) = &cmd.border {
        common::stroke(layer, r, b.color, b.width, &sdf);
    }
}

/// Radius of the corner whose quadrant contains `p` (CSS corner order).
#[inline]
fn quadrant_radius(radii: CornerRadii, p: Vec2, center: Vec2) -> f32 {
    match (p.x < center.x, p.y < center.y) {
        (true, true) => radii.top_left,
        (false, true) => radii.top_right,
        (false, false) => radii.bottom_right,
        (true, false) => radii.bottom_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::{Color, Paint};

    fn solid(rect: Rect, radius: f32) -> RoundedRectCmd {
        RoundedRectCmd::new(rect, CornerRadii::all(radius), Paint::Solid(Color::white()), None)
    }

    #[test]
    fn corners_are_rounded_off() {
        let mut layer = Canvas::transparent(32, 32);
        raster(&solid(Rect::new(0.0, 0.0, 32.0, 32.0), 12.0), &mut layer);

        // Center and edge midpoints are inside.
        assert_eq!(layer.pixel(16, 16).a, 1.0);
        assert_eq!(layer.pixel(16, 0).a, 1.0);
        // The very corner pixel sits outside the radius-12 arc.
        assert!(layer.pixel(0, 0).a < 0.05);
    }

    #[test]
    fn zero_radius_matches_square_corners() {
        let mut layer = Canvas::transparent(16, 16);
        raster(&solid(Rect::new(2.0, 2.0, 12.0, 12.0), 0.0), &mut layer);
        assert!(layer.pixel(2, 2).a > 0.0, "square corner should carry ink");
    }

    #[test]
    fn negative_radius_is_treated_as_zero() {
        let mut a = Canvas::transparent(16, 16);
        let mut b = Canvas::transparent(16, 16);
        raster(&solid(Rect::new(2.0, 2.0, 12.0, 12.0), -5.0), &mut a);
        raster(&solid(Rect::new(2.0, 2.0, 12.0, 12.0), 0.0), &mut b);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(a.pixel(x, y), b.pixel(x, y));
            }
        }
    }

    #[test]
    fn per_corner_radii_only_round_the_named_corner() {
        let mut layer = Canvas::transparent(32, 32);
        let cmd = RoundedRectCmd::new(
            Rect::new(0.0, 0.0, 32.0, 32.0),
            CornerRadii::new(14.0, 0.0, 0.0, 0.0),
            Paint::Solid(Color::white()),
            None,
        );
        raster(&cmd, &mut layer);

        assert!(layer.pixel(0, 0).a < 0.05, "top-left is rounded away");
        assert!(layer.pixel(31, 0).a > 0.4, "top-right keeps its square corner");
    }
}
