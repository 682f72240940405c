use crate::coords::{Rect, Vec2};
use crate::render::Canvas;
use crate::scene::shapes::ellipse::EllipseCmd;

use super::common;

/// Rasterizer for `DrawCmd::Ellipse`.
pub(super) fn raster(cmd: &EllipseCmd, layer: &mut Canvas) {
    let rx = cmd.radii.x;
    let ry = cmd.radii.y;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let center = cmd.center;

    // Normalized radial distance, rescaled by the minor axis so the value
    // approximates pixels near the edge (good enough for a 1px AA ramp).
    let scale = rx.min(ry);
    let sdf = move |p: Vec2| {
        let nx = (p.x - center.x) / rx;
        let ny = (p.y - center.y) / ry;
        (Vec2::new(nx, ny).length() - 1.0) * scale
    };

    let bounds = Rect::new(center.x - rx, center.y - ry, rx * 2.0, ry * 2.0);
    common::fill(layer, bounds, &cmd.paint, &sdf);
}
