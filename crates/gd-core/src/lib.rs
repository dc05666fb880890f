//! Configuration, types, and shared structures for glyphd.
//!
//! This crate contains the types shared across the glyphd workspace:
//! glyph ramp, render parameters, pixel raster, ASCII grid, error
//! taxonomy, and server configuration.

pub mod config;
pub mod error;
pub mod grid;
pub mod params;
pub mod ramp;
pub mod raster;

pub use config::ServerConfig;
pub use error::RenderError;
pub use grid::AsciiGrid;
pub use params::{RawRenderParams, RenderParams};
pub use ramp::GlyphRamp;
pub use raster::Raster;
