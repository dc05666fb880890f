use serde::Deserialize;

use crate::error::RenderError;

/// Largeur par défaut de la grille de sortie, en caractères.
pub const DEFAULT_WIDTH: u32 = 200;
/// Hard cap on output width, bounds grid size and per-request cost.
pub const MAX_WIDTH: u32 = 512;
/// Default contrast amount.
pub const DEFAULT_CONTRAST: f32 = 0.2;
/// Default gamma exponent.
pub const DEFAULT_GAMMA: f32 = 1.1;
/// Default additive brightness, in normalized [0,1] units.
pub const DEFAULT_BRIGHTNESS: f32 = 0.05;

/// Contrast values at or above this make the tone-curve denominator
/// `259 - 255c` non-positive (division by zero, then sign flip).
pub const CONTRAST_LIMIT: f32 = 259.0 / 255.0;

/// Raw query parameters as they arrive on the wire, all optional.
///
/// Parsing is deferred to [`RenderParams::resolve`] so malformed values
/// surface as a structured validation error instead of a framework 400.
#[derive(Debug, Default, Deserialize)]
pub struct RawRenderParams {
    pub width: Option<String>,
    pub contrast: Option<String>,
    pub gamma: Option<String>,
    pub brightness: Option<String>,
    pub invert: Option<String>,
}

/// Validated rendering parameters.
///
/// # Example
/// ```
/// use gd_core::params::{RenderParams, DEFAULT_WIDTH};
/// let params = RenderParams::default();
/// assert_eq!(params.width, DEFAULT_WIDTH);
/// assert!(!params.invert);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RenderParams {
    /// Output width in characters, 1..=cap.
    pub width: u32,
    /// Contrast amount. Typically in [-1, 1]; must keep the tone-curve
    /// denominator positive (`contrast < 259/255`).
    pub contrast: f32,
    /// Gamma exponent, strictly positive.
    pub gamma: f32,
    /// Additive brightness in normalized units, scaled by 255 internally.
    pub brightness: f32,
    /// Invert the glyph mapping (for light backgrounds).
    pub invert: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            contrast: DEFAULT_CONTRAST,
            gamma: DEFAULT_GAMMA,
            brightness: DEFAULT_BRIGHTNESS,
            invert: false,
        }
    }
}

impl RenderParams {
    /// Resolve raw string parameters against the defaults.
    ///
    /// Policy: absent fields take the documented defaults; present but
    /// malformed or out-of-domain fields fail hard. Nothing here ever
    /// silently falls back, so NaN can never reach the tone-curve math.
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidParameter`] for unparsable numbers,
    /// non-finite values, `width` outside `1..=max_width`, `gamma <= 0`,
    /// contrast at or beyond the degenerate limit, or an `invert` literal
    /// other than "true"/"false".
    ///
    /// # Example
    /// ```
    /// use gd_core::params::{RawRenderParams, RenderParams};
    /// let raw = RawRenderParams { width: Some("80".into()), ..Default::default() };
    /// let params = RenderParams::resolve(&raw, 512).unwrap();
    /// assert_eq!(params.width, 80);
    /// ```
    pub fn resolve(raw: &RawRenderParams, max_width: u32) -> Result<Self, RenderError> {
        let width = match raw.width.as_deref() {
            None => DEFAULT_WIDTH.min(max_width),
            Some(s) => parse_u32("width", s)?,
        };
        if width < 1 || width > max_width {
            return Err(invalid(
                "width",
                format!("must be between 1 and {max_width}, got {width}"),
            ));
        }

        let contrast = match raw.contrast.as_deref() {
            None => DEFAULT_CONTRAST,
            Some(s) => parse_f32("contrast", s)?,
        };
        if contrast >= CONTRAST_LIMIT {
            return Err(invalid(
                "contrast",
                format!("must be below {CONTRAST_LIMIT} (degenerate tone curve), got {contrast}"),
            ));
        }

        let gamma = match raw.gamma.as_deref() {
            None => DEFAULT_GAMMA,
            Some(s) => parse_f32("gamma", s)?,
        };
        if gamma <= 0.0 {
            return Err(invalid(
                "gamma",
                format!("must be strictly positive, got {gamma}"),
            ));
        }

        let brightness = match raw.brightness.as_deref() {
            None => DEFAULT_BRIGHTNESS,
            Some(s) => parse_f32("brightness", s)?,
        };

        let invert = match raw.invert.as_deref() {
            None => false,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(invalid(
                    "invert",
                    format!("expected \"true\" or \"false\", got {other:?}"),
                ));
            }
        };

        Ok(Self {
            width,
            contrast,
            gamma,
            brightness,
            invert,
        })
    }
}

fn invalid(name: &'static str, reason: String) -> RenderError {
    RenderError::InvalidParameter { name, reason }
}

fn parse_u32(name: &'static str, s: &str) -> Result<u32, RenderError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| invalid(name, format!("not a valid integer: {s:?}")))
}

fn parse_f32(name: &'static str, s: &str) -> Result<f32, RenderError> {
    let v = s
        .trim()
        .parse::<f32>()
        .map_err(|_| invalid(name, format!("not a valid number: {s:?}")))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(invalid(name, format!("must be finite, got {v}")))
    }
}
