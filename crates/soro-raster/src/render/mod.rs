//! CPU rasterization subsystem.
//!
//! Rasterizers consume `scene` draw streams and blend premultiplied pixels
//! into a [`Canvas`]. Each shape owns its rasterizer under `render::shapes`.
//!
//! Convention:
//! - Geometry is in pixels (top-left origin, +Y down).
//! - Shapes are sampled at pixel centers with a one-pixel antialiasing ramp.
//! - Every operation renders into a transparent layer that is then
//!   alpha-composited over the accumulating canvas.

mod canvas;
mod composer;
pub(crate) mod shapes;

pub use canvas::Canvas;
pub use composer::{compose, ComposeError};
