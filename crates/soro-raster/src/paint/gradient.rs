use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected in ascending `t` order;
/// the constructors on [`LinearGradient`] uphold both.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied colors along the start→end axis.
/// - Points projecting outside [0, 1] clamp to the edge stops (pad spread).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Two-stop ramp from `a` at `start` to `b` at `end`.
    pub fn between(start: Vec2, end: Vec2, a: Color, b: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, a), ColorStop::new(1.0, b)])
    }

    /// Top-to-bottom ramp across `height` pixels.
    pub fn vertical(height: f32, top: Color, bottom: Color) -> Self {
        Self::between(Vec2::zero(), Vec2::new(0.0, height), top, bottom)
    }

    /// Left-to-right ramp across `width` pixels.
    pub fn horizontal(width: f32, left: Color, right: Color) -> Self {
        Self::between(Vec2::zero(), Vec2::new(width, 0.0), left, right)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Color of the gradient at point `p`.
    ///
    /// Projects `p` onto the start→end axis, clamps to [0, 1], and linearly
    /// interpolates between the two neighboring stops. A degenerate gradient
    /// (< 2 stops or zero-length axis) evaluates to its first stop, matching
    /// the solid-fallback behavior rasterizers expect.
    pub fn eval(&self, p: Vec2) -> Color {
        let first = match self.stops.first() {
            Some(s) => s.color,
            None => return Color::transparent(),
        };
        if self.stops.len() < 2 {
            return first;
        }

        let axis = self.end - self.start;
        let len_sq = axis.length_sq();
        if len_sq <= f32::EPSILON {
            return first;
        }

        let t = ((p - self.start).dot(axis) / len_sq).clamp(0.0, 1.0);

        let mut prev = &self.stops[0];
        if t <= prev.t {
            return prev.color;
        }
        for stop in &self.stops[1..] {
            if t <= stop.t {
                let span = stop.t - prev.t;
                if span <= f32::EPSILON {
                    return stop.color;
                }
                return prev.color.lerp(stop.color, (t - prev.t) / span);
            }
            prev = stop;
        }
        prev.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(height: f32) -> LinearGradient {
        LinearGradient::vertical(
            height,
            Color::from_srgb_u8(59, 130, 246, 255),
            Color::from_srgb_u8(30, 64, 175, 255),
        )
    }

    #[test]
    fn eval_at_endpoints() {
        let g = ramp(100.0);
        assert_eq!(g.eval(Vec2::new(0.0, 0.0)).to_srgb_u8(), [59, 130, 246, 255]);
        assert_eq!(g.eval(Vec2::new(0.0, 100.0)).to_srgb_u8(), [30, 64, 175, 255]);
    }

    #[test]
    fn eval_clamps_outside_axis() {
        // Pad spread: points beyond the axis take the edge stop.
        let g = ramp(100.0);
        assert_eq!(g.eval(Vec2::new(0.0, -50.0)), g.eval(Vec2::zero()));
        assert_eq!(g.eval(Vec2::new(0.0, 250.0)), g.eval(Vec2::new(0.0, 100.0)));
    }

    #[test]
    fn eval_is_monotonic_per_channel() {
        let g = ramp(256.0);
        let mut prev = g.eval(Vec2::new(0.0, 0.0));
        for y in 1..=256 {
            let c = g.eval(Vec2::new(0.0, y as f32));
            // Red descends 59 → 30, blue descends 246 → 175.
            assert!(c.r <= prev.r + 1e-6);
            assert!(c.b <= prev.b + 1e-6);
            prev = c;
        }
    }

    #[test]
    fn eval_matches_linear_interpolation() {
        let height = 512.0;
        let g = ramp(height);
        for y in [0usize, 17, 128, 300, 511] {
            let c = g.eval(Vec2::new(0.0, y as f32)).to_srgb_u8();
            let t = y as f32 / height;
            let expect_r = (59.0 + (30.0 - 59.0) * t).round() as i32;
            let expect_g = (130.0 + (64.0 - 130.0) * t).round() as i32;
            let expect_b = (246.0 + (175.0 - 246.0) * t).round() as i32;
            assert!((c[0] as i32 - expect_r).abs() <= 1, "red off at y={y}");
            assert!((c[1] as i32 - expect_g).abs() <= 1, "green off at y={y}");
            assert!((c[2] as i32 - expect_b).abs() <= 1, "blue off at y={y}");
        }
    }

    #[test]
    fn eval_horizontal_ignores_y() {
        let g = LinearGradient::horizontal(10.0, Color::black(), Color::white());
        let a = g.eval(Vec2::new(5.0, 0.0));
        let b = g.eval(Vec2::new(5.0, 999.0));
        assert_eq!(a, b);
    }

    #[test]
    fn multi_stop_segments() {
        let g = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(0.0, 100.0),
            vec![
                ColorStop::new(0.0, Color::black()),
                ColorStop::new(0.5, Color::white()),
                ColorStop::new(1.0, Color::black()),
            ],
        );
        assert_eq!(g.eval(Vec2::new(0.0, 50.0)).to_srgb_u8(), [255, 255, 255, 255]);
        let quarter = g.eval(Vec2::new(0.0, 25.0)).to_srgb_u8();
        assert_eq!(quarter[0], 128);
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g = LinearGradient::between(Vec2::zero(), Vec2::zero(), Color::black(), Color::white());
        assert!(!g.is_valid());
    }
}
