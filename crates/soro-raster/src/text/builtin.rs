//! Built-in 8×8 bitmap face.
//!
//! This is the always-available fallback when no TrueType font can be
//! loaded: glyphs come from the `font8x8` tables and are scaled to the
//! requested pixel size with nearest-neighbor sampling. Typography is
//! crude but every string still renders.

use font8x8::legacy::BASIC_LEGACY;

/// Source glyphs are 8×8 cells, one byte per row, LSB = leftmost column.
const CELL: usize = 8;

/// Rasterized glyph coverage, row-major, one byte per pixel (0 or 255).
pub(crate) struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Horizontal pen advance per character. The face is monospaced on its
/// full cell, so advance equals the rendered cell size.
#[inline]
pub(crate) fn advance(size: f32) -> f32 {
    size.max(1.0).round()
}

/// Scales the 8×8 glyph for `ch` up to a `size`-pixel cell.
pub(crate) fn rasterize(ch: char, size: f32) -> GlyphBitmap {
    let px = size.max(1.0).round() as usize;
    let rows = glyph_rows(ch);

    let mut coverage = vec![0u8; px * px];
    for y in 0..px {
        let sy = y * CELL / px;
        for x in 0..px {
            let sx = x * CELL / px;
            if rows[sy] & (1 << sx) != 0 {
                coverage[y * px + x] = 255;
            }
        }
    }

    GlyphBitmap { width: px, height: px, coverage }
}

fn glyph_rows(ch: char) -> [u8; 8] {
    let idx = ch as usize;
    if idx < BASIC_LEGACY.len() {
        BASIC_LEGACY[idx]
    } else {
        // Outside the basic table: render the replacement glyph.
        BASIC_LEGACY['?' as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterize_matches_requested_cell() {
        let g = rasterize('S', 32.0);
        assert_eq!(g.width, 32);
        assert_eq!(g.height, 32);
        assert_eq!(g.coverage.len(), 32 * 32);
    }

    #[test]
    fn visible_glyph_has_ink() {
        let g = rasterize('S', 16.0);
        assert!(g.coverage.iter().any(|&c| c > 0));
    }

    #[test]
    fn space_is_blank() {
        let g = rasterize(' ', 16.0);
        assert!(g.coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn non_ascii_falls_back_to_replacement() {
        let g = rasterize('€', 16.0);
        let q = rasterize('?', 16.0);
        assert_eq!(g.coverage, q.coverage);
    }
}
