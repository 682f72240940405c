//! Build-time artwork for the SoroOne app.
//!
//! Each artifact is a declarative draw list composed by `soro-raster`;
//! the binaries (`icons`, `splash`) only add fixed output paths and
//! confirmation output, so everything visual is testable without disk I/O.

pub mod artwork;
pub mod fonts;
pub mod palette;
