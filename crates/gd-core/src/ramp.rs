use anyhow::{Result, bail};

/// 70 caractères — Paul Bourke extended, du plus clair au plus dense.
///
/// Ramp used by the service unless overridden in the config file.
pub const DEFAULT_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// 10 caractères — compact, bon contraste.
pub const RAMP_COMPACT: &str = " .:-=+*#%@";

/// Ordered glyph ramp, index 0 = least ink, index L-1 = most ink.
///
/// Built once at process start and passed explicitly into the pipeline,
/// so tests can swap in alternate ramps.
///
/// # Example
/// ```
/// use gd_core::ramp::GlyphRamp;
/// let ramp = GlyphRamp::new(" .:#@").unwrap();
/// assert_eq!(ramp.len(), 5);
/// assert_eq!(ramp.glyph(0), ' ');
/// assert_eq!(ramp.glyph(4), '@');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl Default for GlyphRamp {
    /// The built-in 70-character ramp, known valid.
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl GlyphRamp {
    /// Build a ramp from a string ordered lightest→densest.
    ///
    /// # Errors
    /// Returns an error if the ramp has fewer than 2 or more than 256
    /// characters (grid cells store ramp indices as `u8`).
    pub fn new(ramp: &str) -> Result<Self> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.len() < 2 {
            bail!("glyph ramp needs at least 2 characters, got {}", chars.len());
        }
        if chars.len() > 256 {
            bail!("glyph ramp is limited to 256 characters, got {}", chars.len());
        }
        Ok(Self { chars })
    }

    /// Number of glyphs in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false — construction rejects empty ramps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Index of the densest glyph.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.chars.len() - 1
    }

    /// Map a corrected luminance [0..255] to a ramp index.
    ///
    /// Darker pixels map to later (denser) glyphs:
    /// `idx = floor((1 - v/255) * (L-1))`, clamped to `[0, L-1]`.
    ///
    /// # Example
    /// ```
    /// use gd_core::ramp::GlyphRamp;
    /// let ramp = GlyphRamp::new(" .:#@").unwrap();
    /// assert_eq!(ramp.index(255), 0);
    /// assert_eq!(ramp.index(0), 4);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(&self, luminance: u8) -> usize {
        let value = 1.0 - f32::from(luminance) / 255.0;
        let idx = (value * self.last_index() as f32).floor() as usize;
        idx.min(self.last_index())
    }

    /// Glyph at `idx`, clamped to the ramp bounds.
    ///
    /// # Example
    /// ```
    /// use gd_core::ramp::GlyphRamp;
    /// let ramp = GlyphRamp::new(" .:#@").unwrap();
    /// assert_eq!(ramp.glyph(2), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, idx: usize) -> char {
        self.chars[idx.min(self.last_index())]
    }
}
