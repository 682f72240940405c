use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::coords::Vec2;
use crate::paint::{Color, Paint};

/// In-memory pixel buffer being composed.
///
/// Pixels are premultiplied [`Color`] values in row-major order. A canvas
/// doubles as a *layer*: created transparent, drawn into by one rasterizer,
/// then flattened onto the accumulating canvas with [`composite_over`].
///
/// Composition and disk I/O are deliberately separate: everything up to
/// [`to_rgba_image`] is pure memory, so the compositor is testable without
/// touching the filesystem.
///
/// [`composite_over`]: Canvas::composite_over
/// [`to_rgba_image`]: Canvas::to_rgba_image
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Fully transparent canvas, used as a per-operation layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "canvas dimensions must be positive");
        Self {
            width,
            height,
            pixels: vec![Color::transparent(); width as usize * height as usize],
        }
    }

    /// Canvas initialized from a background paint, evaluated per pixel.
    pub fn filled(width: u32, height: u32, background: &Paint) -> Self {
        let mut canvas = match background {
            Paint::Solid(c) => Self {
                width,
                height,
                pixels: vec![*c; width as usize * height as usize],
            },
            Paint::LinearGradient(_) => Self::transparent(width, height),
        };

        if let Paint::LinearGradient(g) = background {
            for y in 0..height {
                for x in 0..width {
                    let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    canvas.pixels[(y * width + x) as usize] = g.eval(p);
                }
            }
        }

        canvas
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Blends `src` over the pixel at (`x`, `y`). Out-of-range coordinates
    /// are the caller's bug; rasterizers clamp their bounds first.
    #[inline]
    pub(crate) fn blend_pixel(&mut self, x: u32, y: u32, src: Color) {
        let i = (y * self.width + x) as usize;
        self.pixels[i] = src.over(self.pixels[i]);
    }

    /// Resets every pixel to transparent, keeping the allocation.
    pub(crate) fn clear_transparent(&mut self) {
        self.pixels.fill(Color::transparent());
    }

    /// Alpha-composites a same-size layer over this canvas ("over" operator).
    ///
    /// A fully transparent layer leaves the canvas bit-for-bit unchanged.
    pub fn composite_over(&mut self, layer: &Canvas) {
        debug_assert!(
            self.width == layer.width && self.height == layer.height,
            "layer size must match canvas size"
        );
        for (dst, &src) in self.pixels.iter_mut().zip(&layer.pixels) {
            if src.a > 0.0 {
                *dst = src.over(*dst);
            }
        }
    }

    /// Forces every pixel fully opaque.
    ///
    /// Premultiplied RGB is kept as-is, which is equivalent to compositing
    /// the canvas over black before opaquing. For canvases built on an
    /// opaque background this is a no-op on RGB.
    pub fn flattened_opaque(mut self) -> Self {
        for px in &mut self.pixels {
            px.a = 1.0;
        }
        self
    }

    /// Converts to an 8-bit straight-alpha RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixel(x, y).to_srgb_u8())
        })
    }

    /// Encodes the canvas as PNG at `path`, creating or overwriting the file.
    ///
    /// The parent directory must already exist; a missing directory or
    /// unwritable path surfaces as an error for the caller to propagate.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.to_rgba_image().save_with_format(path, ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::LinearGradient;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn transparent_canvas_has_requested_size() {
        let c = Canvas::transparent(7, 5);
        assert_eq!((c.width(), c.height()), (7, 5));
        assert_eq!(c.pixel(6, 4), Color::transparent());
    }

    #[test]
    fn filled_solid_fills_every_pixel() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let c = Canvas::filled(3, 3, &Paint::Solid(red));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(c.pixel(x, y), red);
            }
        }
    }

    #[test]
    fn filled_gradient_ramps_top_to_bottom() {
        let g = LinearGradient::vertical(64.0, Color::black(), Color::white());
        let c = Canvas::filled(4, 64, &Paint::LinearGradient(g));
        let top = c.pixel(0, 0).to_srgb_u8();
        let bottom = c.pixel(0, 63).to_srgb_u8();
        assert!(top[0] <= 2, "top should be near black, got {}", top[0]);
        assert!(bottom[0] >= 253, "bottom should be near white, got {}", bottom[0]);
    }

    // ── compositing ───────────────────────────────────────────────────────

    #[test]
    fn transparent_layer_composite_is_identity() {
        let mut base = Canvas::filled(8, 8, &Paint::Solid(Color::from_srgb_u8(12, 34, 56, 255)));
        let reference = base.clone();
        let layer = Canvas::transparent(8, 8);

        base.composite_over(&layer);

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(base.pixel(x, y), reference.pixel(x, y));
            }
        }
    }

    #[test]
    fn semi_transparent_layer_blends() {
        let mut base = Canvas::filled(1, 1, &Paint::Solid(Color::black()));
        let mut layer = Canvas::transparent(1, 1);
        layer.blend_pixel(0, 0, Color::from_straight(1.0, 1.0, 1.0, 0.5));

        base.composite_over(&layer);

        let (r, _, _, a) = base.pixel(0, 0).to_straight();
        assert!((r - 0.5).abs() < 1e-5);
        assert!((a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clear_transparent_resets_pixels() {
        let mut layer = Canvas::transparent(2, 2);
        layer.blend_pixel(1, 1, Color::white());
        layer.clear_transparent();
        assert_eq!(layer.pixel(1, 1), Color::transparent());
    }

    // ── output ────────────────────────────────────────────────────────────

    #[test]
    fn flattened_opaque_sets_full_alpha() {
        let c = Canvas::transparent(2, 2).flattened_opaque();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(c.pixel(x, y).a, 1.0);
            }
        }
    }

    #[test]
    fn to_rgba_image_matches_dimensions_and_bytes() {
        let c = Canvas::filled(5, 3, &Paint::Solid(Color::from_srgb_u8(59, 130, 246, 255)));
        let img = c.to_rgba_image();
        assert_eq!((img.width(), img.height()), (5, 3));
        assert_eq!(img.get_pixel(4, 2).0, [59, 130, 246, 255]);
    }

    #[test]
    fn save_png_round_trips() {
        let dir = std::env::temp_dir().join(format!("soro-raster-canvas-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.png");

        let c = Canvas::filled(6, 4, &Paint::Solid(Color::from_srgb_u8(30, 64, 175, 255)));
        c.save_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (6, 4));
        assert_eq!(img.get_pixel(0, 0).0, [30, 64, 175, 255]);
    }
}
