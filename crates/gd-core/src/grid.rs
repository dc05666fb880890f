use crate::ramp::GlyphRamp;

/// Grille de sortie ASCII : indices de ramp, row-major.
///
/// Stores ramp indices rather than characters so inversion and
/// complement checks stay index-exact; serialization resolves glyphs
/// through the ramp.
///
/// # Example
/// ```
/// use gd_core::grid::AsciiGrid;
/// use gd_core::ramp::GlyphRamp;
/// let ramp = GlyphRamp::new(" .:#@").unwrap();
/// let mut grid = AsciiGrid::new(2, 1);
/// grid.set(0, 0, 4);
/// grid.set(1, 0, 0);
/// assert_eq!(grid.to_text(&ramp), "@ \n");
/// ```
#[derive(Clone)]
pub struct AsciiGrid {
    /// Flat array of ramp indices, row-major.
    indices: Vec<u8>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille pré-allouée, remplie d'indice 0.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            indices: vec![0u8; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Set the ramp index at (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, idx: u8) {
        self.indices[y as usize * self.width as usize + x as usize] = idx;
    }

    /// Ramp index at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.indices[y as usize * self.width as usize + x as usize]
    }

    /// Serialize to text: rows top-to-bottom, one `\n` per row.
    ///
    /// Every row, including the last, carries exactly one terminator.
    #[must_use]
    pub fn to_text(&self, ramp: &GlyphRamp) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(ramp.glyph(usize::from(self.get(x, y))));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_terminated_including_the_last() {
        let ramp = GlyphRamp::new(" .:#@").unwrap();
        let grid = AsciiGrid::new(3, 2);
        let text = grid.to_text(&ramp);
        assert_eq!(text, "   \n   \n");
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn row_width_excludes_terminator() {
        let ramp = GlyphRamp::new(" .:#@").unwrap();
        let grid = AsciiGrid::new(7, 3);
        for line in grid.to_text(&ramp).lines() {
            assert_eq!(line.chars().count(), 7);
        }
    }

    #[test]
    fn set_get_roundtrip() {
        let mut grid = AsciiGrid::new(4, 4);
        grid.set(3, 2, 42);
        assert_eq!(grid.get(3, 2), 42);
        assert_eq!(grid.get(2, 3), 0);
    }
}
