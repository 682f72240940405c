use std::fmt;
use std::path::Path;

use crate::coords::Vec2;

use super::builtin;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a face registered in a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// A registered face: either a parsed TrueType/OpenType font or the
/// built-in bitmap face.
pub(crate) enum FontFace {
    Builtin,
    Ttf(fontdue::Font),
}

/// Owns the faces available to text commands.
///
/// Faces are immutable after loading. Id 0 is always the built-in bitmap
/// face, so a `FontId` obtained from any `FontSystem` method can render;
/// preferred-font unavailability degrades typography, never output.
pub struct FontSystem {
    faces: Vec<FontFace>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { faces: vec![FontFace::Builtin] }
    }

    /// The built-in bitmap face. Always present.
    #[inline]
    pub fn builtin(&self) -> FontId {
        FontId(0)
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the face in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.faces.len());
        self.faces.push(FontFace::Ttf(font));
        Ok(id)
    }

    /// Loads the first candidate font file that exists and parses.
    ///
    /// Candidates that cannot be read or parsed are skipped. When none
    /// load, returns the built-in face. The substitution is silent apart
    /// from a log line; callers never see an error.
    pub fn load_first_available<P: AsRef<Path>>(&mut self, candidates: &[P]) -> FontId {
        for candidate in candidates {
            let path = candidate.as_ref();
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            match self.load_font(&bytes) {
                Ok(id) => {
                    log::debug!("loaded font {}", path.display());
                    return id;
                }
                Err(e) => log::debug!("skipping font {}: {e}", path.display()),
            }
        }

        log::warn!("no preferred font available; using the built-in bitmap face");
        self.builtin()
    }

    /// Face lookup. An invalid id resolves to the built-in face rather
    /// than failing, matching the silent-fallback contract.
    pub(crate) fn face(&self, id: FontId) -> &FontFace {
        self.faces.get(id.0).unwrap_or(&self.faces[0])
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in pixels. Width is the pen-advance
    /// extent, which matches the positions the rasterizer draws at, so
    /// centered origins derived from this measurement line up with the
    /// rendered glyphs.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        match self.face(id) {
            FontFace::Builtin => {
                let n = text.chars().count() as f32;
                Vec2::new(n * builtin::advance(size), builtin::advance(size))
            }
            FontFace::Ttf(font) => {
                use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

                let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
                layout.reset(&LayoutSettings::default());
                layout.append(&[font], &TextStyle::new(text, size, 0));

                let glyphs = layout.glyphs();
                if glyphs.is_empty() {
                    return Vec2::new(0.0, size * 1.2);
                }

                // Pen position after each glyph (g.x - xmin + advance_width)
                // rather than the bitmap right edge, so trailing bearings are
                // included in the width.
                let w = glyphs
                    .iter()
                    .map(|g| {
                        let m = font.metrics_indexed(g.key.glyph_index, size);
                        (g.x - m.xmin as f32 + m.advance_width).max(0.0)
                    })
                    .fold(0.0f32, f32::max);
                let h = glyphs
                    .iter()
                    .map(|g| g.y + g.height as f32)
                    .fold(size, f32::max);
                Vec2::new(w, h)
            }
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
