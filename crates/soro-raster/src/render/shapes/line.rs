use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::render::Canvas;
use crate::scene::shapes::line::LineCmd;

use super::common;

/// Rasterizer for `DrawCmd::Line`.
///
/// The stroke is a capsule: distance to the segment minus half the width,
/// which gives round caps at both ends.
pub(super) fn raster(cmd: &LineCmd, layer: &mut Canvas) {
    let half_width = cmd.width / 2.0;
    if half_width <= 0.0 {
        return;
    }

    let from = cmd.from;
    let axis = cmd.to - cmd.from;
    let len_sq = axis.length_sq();

    let sdf = move |p: Vec2| {
        let t = if len_sq <= f32::EPSILON {
            0.0
        } else {
            ((p - from).dot(axis) / len_sq).clamp(0.0, 1.0)
        };
        (p - (from + axis * t)).length() - half_width
    };

    let bounds = Rect::from_corners(cmd.from, cmd.to).inflated(half_width);
    common::fill(layer, bounds, &Paint::Solid(cmd.color), &sdf);
}
