//! Soro raster crate.
//!
//! CPU compositor behind the Soro artwork generators: record declarative
//! draw commands into a [`scene::DrawList`], then [`render::compose`] them
//! back-to-front onto a [`render::Canvas`] and encode the result as PNG.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
