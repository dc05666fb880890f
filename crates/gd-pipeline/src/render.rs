use anyhow::Result;
use gd_core::config::ServerConfig;
use gd_core::params::RenderParams;
use gd_core::{AsciiGrid, GlyphRamp, RenderError};

use crate::decode::decode_image;
use crate::resample::{output_dims, resample};
use crate::tone::ToneCurve;

/// Process-wide pipeline constants, built once at startup.
///
/// Injected explicitly rather than read from globals so tests can run
/// with alternate ramps and scale factors.
#[derive(Clone)]
pub struct PipelineSettings {
    /// Glyph ramp, lightest→densest.
    pub ramp: GlyphRamp,
    /// Aspect correction for the output row count.
    pub height_scale: f32,
    /// Upper bound on output rows. The width cap alone does not bound
    /// the grid: a tall-and-narrow source multiplies the row count.
    pub max_rows: u32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            ramp: GlyphRamp::default(),
            height_scale: gd_core::config::DEFAULT_HEIGHT_SCALE,
            max_rows: gd_core::config::DEFAULT_MAX_ROWS,
        }
    }
}

impl PipelineSettings {
    /// Build settings from the loaded server configuration.
    ///
    /// # Errors
    /// Returns an error if the configured ramp is invalid.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            ramp: GlyphRamp::new(&config.ramp)?,
            height_scale: config.height_scale,
            max_rows: config.max_rows,
        })
    }
}

/// Convert image bytes into an ASCII-art text grid.
///
/// Pure and deterministic: identical bytes and parameters always yield
/// byte-identical output. Stages run in a fixed order — decode,
/// proportional resample, tone curve, glyph mapping, grid assembly.
///
/// # Errors
/// [`RenderError::NoInput`] for empty input (checked before the
/// decoder), [`RenderError::Decode`] for unsupported or corrupt bytes,
/// [`RenderError::InvalidParameter`] / [`RenderError::Processing`] for
/// the remaining stages.
pub fn render_ascii(
    bytes: &[u8],
    params: &RenderParams,
    settings: &PipelineSettings,
) -> Result<String, RenderError> {
    if bytes.is_empty() {
        return Err(RenderError::NoInput);
    }

    let src = decode_image(bytes)?;
    let (cols, rows) = output_dims(src.width, src.height, params.width, settings.height_scale);
    // Bound the grid before any allocation: the upload cap does not
    // stop a few-KB image from encoding an extreme aspect ratio.
    if rows > settings.max_rows {
        return Err(RenderError::InvalidParameter {
            name: "width",
            reason: format!(
                "output grid {cols}x{rows} exceeds the {}-row limit for this image",
                settings.max_rows
            ),
        });
    }
    log::debug!(
        "rendering {}x{} source to {cols}x{rows} grid",
        src.width,
        src.height
    );
    let resized = resample(&src, cols, rows)?;

    let lut = ToneCurve::new(params)?.lut();
    let last = settings.ramp.last_index();

    let mut grid = AsciiGrid::new(cols, rows);
    for y in 0..rows {
        for x in 0..cols {
            let v = lut[usize::from(resized.luminance(x, y))];
            let mut idx = settings.ramp.index(v);
            if params.invert {
                // Complement at the index level keeps inverted and
                // normal renders element-wise exact complements.
                idx = last - idx;
            }
            grid.set(x, y, idx as u8);
        }
    }

    Ok(grid.to_text(&settings.ramp))
}
