use crate::coords::Vec2;
use crate::render::Canvas;
use crate::scene::shapes::rect::RectCmd;

use super::common;

/// Rasterizer for `DrawCmd::Rect`.
pub(super) fn raster(cmd: &RectCmd, layer: &mut Canvas) {
    let r = cmd.rect.normalized();
    if r.is_empty() {
        return;
    }

    let half = r.size / 2.0;
    let center = r.center();

    // Axis-aligned box distance: exact on edges, which is all the AA ramp needs.
    let sdf = |p: Vec2| {
        let qx = (p.x - center.x).abs() - half.x;
        let qy = (p.y - center.y).abs() - half.y;
        qx.max(qy)
    };

    common::fill(layer, r, &cmd.paint, &sdf);
    if let Some(b) = &cmd.border {
        common::stroke(layer, r, b.color, b.width, &sdf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::{Color, Paint};
    use crate::scene::shapes::Border;

    #[test]
    fn fills_interior_and_leaves_exterior() {
        let mut layer = Canvas::transparent(16, 16);
        let cmd = RectCmd::new(
            Rect::new(4.0, 4.0, 8.0, 8.0),
            Paint::Solid(Color::white()),
            None,
        );
        raster(&cmd, &mut layer);

        assert_eq!(layer.pixel(8, 8).a, 1.0);
        assert_eq!(layer.pixel(1, 1).a, 0.0);
    }

    #[test]
    fn border_only_rect_leaves_center_empty() {
        let mut layer = Canvas::transparent(20, 20);
        let cmd = RectCmd::new(
            Rect::new(2.0, 2.0, 16.0, 16.0),
            Paint::Solid(Color::transparent()),
            Some(Border::new(2.0, Color::white())),
        );
        raster(&cmd, &mut layer);

        assert!(layer.pixel(3, 10).a > 0.9, "edge band should be stroked");
        assert_eq!(layer.pixel(10, 10).a, 0.0, "interior should stay empty");
    }

    #[test]
    fn off_canvas_rect_is_a_no_op() {
        let mut layer = Canvas::transparent(8, 8);
        let cmd = RectCmd::new(
            Rect::new(100.0, 100.0, 10.0, 10.0),
            Paint::Solid(Color::white()),
            None,
        );
        raster(&cmd, &mut layer);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(layer.pixel(x, y), Color::transparent());
            }
        }
    }
}
