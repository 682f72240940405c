//! Coordinate and geometry types shared across the compositor.
//!
//! Canonical space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rasterizers sample shapes at pixel centers (`x + 0.5`, `y + 0.5`).

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
