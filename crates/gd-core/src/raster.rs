/// Buffer de pixels RGBA row-major, 4 bytes par pixel.
///
/// Owned by a single pipeline invocation; never shared across requests.
///
/// # Example
/// ```
/// use gd_core::raster::Raster;
/// let r = Raster::new(10, 10);
/// assert_eq!(r.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct Raster {
    /// Pixels RGBA, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Raster {
    /// Create a zeroed raster with the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width as usize) * (height as usize) * 4],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer. Returns `None` if the buffer length
    /// does not match the dimensions.
    #[must_use]
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() == (width as usize) * (height as usize) * 4 {
            Some(Self {
                data,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use gd_core::raster::Raster;
    /// let r = Raster::new(10, 10);
    /// assert_eq!(r.pixel(3, 3), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Luminance perceptuelle BT.601 : (299R + 587G + 114B) / 1000.
    ///
    /// # Example
    /// ```
    /// use gd_core::raster::Raster;
    /// let mut r = Raster::new(1, 1);
    /// r.data.copy_from_slice(&[255, 255, 255, 255]);
    /// assert_eq!(r.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_validates_length() {
        assert!(Raster::from_rgba(vec![0u8; 16], 2, 2).is_some());
        assert!(Raster::from_rgba(vec![0u8; 15], 2, 2).is_none());
    }

    #[test]
    fn luminance_weighting_is_bt601() {
        let mut r = Raster::new(3, 1);
        // Pure red, green, blue pixels.
        r.data.copy_from_slice(&[
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255,
        ]);
        assert_eq!(r.luminance(0, 0), 76); // 255 * 0.299
        assert_eq!(r.luminance(1, 0), 149); // 255 * 0.587
        assert_eq!(r.luminance(2, 0), 29); // 255 * 0.114
    }

    #[test]
    fn grey_pixel_keeps_its_value() {
        let mut r = Raster::new(1, 1);
        r.data.copy_from_slice(&[128, 128, 128, 255]);
        assert_eq!(r.luminance(0, 0), 128);
    }
}
