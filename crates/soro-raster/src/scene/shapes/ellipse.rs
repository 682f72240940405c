use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled ellipse draw payload.
///
/// `radii` holds the semi-axes; a circle is the `radii.x == radii.y` case.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub radii: Vec2,
    pub paint: Paint,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, radii: Vec2, paint: Paint) -> Self {
        Self { center, radii, paint }
    }

    /// Ellipse inscribed in `rect`.
    #[inline]
    pub fn inscribed(rect: Rect, paint: Paint) -> Self {
        let r = rect.normalized();
        Self::new(r.center(), r.size / 2.0, paint)
    }
}

impl DrawList {
    /// Records an ellipse draw command.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, center: Vec2, radii: Vec2, paint: Paint) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd::new(center, radii, paint)));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_ellipse(z, center, Vec2::new(radius, radius), Paint::Solid(color));
    }
}
