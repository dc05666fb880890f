//! Image-to-glyph pipeline for glyphd.
//!
//! A pure function from (image bytes, parameters) to a text grid:
//! decode → proportional resample → tone curve → glyph mapping →
//! grid assembly. No state is kept across invocations.

pub mod decode;
pub mod render;
pub mod resample;
pub mod tone;

pub use render::{PipelineSettings, render_ascii};
pub use tone::ToneCurve;
