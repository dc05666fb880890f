use gd_core::{RenderError, params::RenderParams};

/// Tone curve composée : contraste → gamma → brightness → clamp.
///
/// Coefficients pré-calculés une fois par requête; l'application par
/// pixel ne fait que deux multiplications et un `powf`.
///
/// The order is significant: contrast re-spreads values around the
/// midpoint before gamma reshapes the curve, and brightness is an
/// additive trim applied last.
///
/// # Example
/// ```
/// use gd_core::params::RenderParams;
/// use gd_pipeline::tone::ToneCurve;
/// let neutral = RenderParams { contrast: 0.0, gamma: 1.0, brightness: 0.0, ..Default::default() };
/// let tone = ToneCurve::new(&neutral).unwrap();
/// assert_eq!(tone.apply(128), 128);
/// ```
#[derive(Debug)]
pub struct ToneCurve {
    factor: f32,
    inv_gamma: f32,
    offset: f32,
}

impl ToneCurve {
    /// Build the curve from validated parameters.
    ///
    /// # Errors
    /// Double-guards the domain checks performed at parameter
    /// resolution: a non-positive contrast denominator or gamma is
    /// rejected here as well, so the math below can never divide by
    /// zero or produce NaN.
    pub fn new(params: &RenderParams) -> Result<Self, RenderError> {
        let denom = 255.0 * (259.0 - params.contrast * 255.0);
        if denom <= 0.0 {
            return Err(RenderError::InvalidParameter {
                name: "contrast",
                reason: format!("degenerate tone curve for contrast {}", params.contrast),
            });
        }
        if params.gamma <= 0.0 {
            return Err(RenderError::InvalidParameter {
                name: "gamma",
                reason: format!("must be strictly positive, got {}", params.gamma),
            });
        }
        Ok(Self {
            factor: (259.0 * (params.contrast * 255.0 + 255.0)) / denom,
            inv_gamma: 1.0 / params.gamma,
            offset: params.brightness * 255.0,
        })
    }

    /// Apply the curve to one luminance value.
    #[inline(always)]
    #[must_use]
    pub fn apply(&self, v: u8) -> u8 {
        let v = self.factor * (f32::from(v) - 128.0) + 128.0;
        // A negative base under the fractional power would be NaN.
        let v = v.clamp(0.0, 255.0);
        let v = 255.0 * (v / 255.0).powf(self.inv_gamma);
        let v = v + self.offset;
        v.clamp(0.0, 255.0).round() as u8
    }

    /// Pré-calcule la courbe pour les 256 valeurs de luminance.
    #[must_use]
    pub fn lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = self.apply(i as u8);
        }
        lut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(contrast: f32, gamma: f32, brightness: f32) -> RenderParams {
        RenderParams {
            contrast,
            gamma,
            brightness,
            ..Default::default()
        }
    }

    #[test]
    fn neutral_parameters_are_identity() {
        let tone = ToneCurve::new(&params(0.0, 1.0, 0.0)).unwrap();
        for v in 0..=255u8 {
            assert_eq!(tone.apply(v), v);
        }
    }

    #[test]
    fn contrast_spreads_values_away_from_the_midpoint() {
        let tone = ToneCurve::new(&params(0.5, 1.0, 0.0)).unwrap();
        assert!(tone.apply(64) < 64);
        assert!(tone.apply(192) > 192);
        assert_eq!(tone.apply(128), 128);
    }

    #[test]
    fn gamma_above_one_lifts_midtones() {
        let tone = ToneCurve::new(&params(0.0, 2.0, 0.0)).unwrap();
        assert!(tone.apply(64) > 64);
        assert_eq!(tone.apply(0), 0);
        assert_eq!(tone.apply(255), 255);
    }

    #[test]
    fn brightness_is_an_additive_trim() {
        let tone = ToneCurve::new(&params(0.0, 1.0, 0.1)).unwrap();
        assert_eq!(tone.apply(100), 126); // 100 + 0.1 * 255 = 125.5 → 126
        assert_eq!(tone.apply(250), 255); // clamped
    }

    #[test]
    fn stage_order_is_contrast_then_gamma_then_brightness() {
        // Service defaults: factor = (259·306)/(255·208) ≈ 1.4942.
        // v=85 → contrast 63.75 → gamma 72.32 → brightness 85.07 → 85.
        let tone = ToneCurve::new(&params(0.2, 1.1, 0.05)).unwrap();
        assert_eq!(tone.apply(85), 85);
        // v=0 → contrast clamps at 0 → gamma 0 → brightness 12.75 → 13.
        assert_eq!(tone.apply(0), 13);
    }

    #[test]
    fn degenerate_contrast_never_reaches_the_math() {
        let err = ToneCurve::new(&params(1.1, 1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidParameter { name: "contrast", .. }
        ));
    }

    #[test]
    fn non_positive_gamma_is_rejected() {
        assert!(ToneCurve::new(&params(0.0, 0.0, 0.0)).is_err());
        assert!(ToneCurve::new(&params(0.0, -2.0, 0.0)).is_err());
    }

    #[test]
    fn lut_matches_apply() {
        let tone = ToneCurve::new(&params(0.2, 1.1, 0.05)).unwrap();
        let lut = tone.lut();
        for v in 0..=255u8 {
            assert_eq!(lut[usize::from(v)], tone.apply(v));
        }
    }
}
