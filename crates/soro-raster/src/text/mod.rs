//! Font loading, measurement, and the built-in fallback face.

pub(crate) mod builtin;
mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

pub(crate) use font_system::FontFace;
