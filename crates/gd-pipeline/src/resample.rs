use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use gd_core::{Raster, RenderError};

/// Compute the output grid dimensions for a source image.
///
/// Columns equal `target_width`; rows follow the source aspect ratio
/// reduced by `height_scale` to compensate for glyph cells being taller
/// than wide: `floor(src_h / (src_w / target_width) * height_scale)`.
/// At least one row is always produced so the resizer never sees a
/// zero-height destination.
///
/// # Example
/// ```
/// use gd_pipeline::resample::output_dims;
/// assert_eq!(output_dims(400, 300, 100, 0.45), (100, 33));
/// ```
#[must_use]
pub fn output_dims(src_w: u32, src_h: u32, target_w: u32, height_scale: f32) -> (u32, u32) {
    let scale = f64::from(src_w) / f64::from(target_w);
    let rows = (f64::from(src_h) / scale * f64::from(height_scale)).floor() as u32;
    (target_w, rows.max(1))
}

/// Resample an RGBA raster to the given dimensions.
///
/// Identical dimensions short-circuit to a copy, keeping already-sized
/// inputs byte-exact.
///
/// # Errors
/// Returns [`RenderError::Processing`] if the resize operation fails.
pub fn resample(src: &Raster, dst_w: u32, dst_h: u32) -> Result<Raster, RenderError> {
    if src.width == dst_w && src.height == dst_h {
        return Ok(src.clone());
    }

    // Forced copy: fast_image_resize wants &mut on the source buffer.
    let mut src_buf = src.data.clone();
    let src_image = Image::from_slice_u8(src.width, src.height, &mut src_buf, PixelType::U8x4)
        .map_err(|e| RenderError::Processing(format!("invalid source dimensions: {e}")))?;

    let mut dst = Raster::new(dst_w, dst_h);
    let mut dst_image = Image::from_slice_u8(dst_w, dst_h, &mut dst.data, PixelType::U8x4)
        .map_err(|e| RenderError::Processing(format!("invalid destination dimensions: {e}")))?;

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, Some(&ResizeOptions::new()))
        .map_err(|e| RenderError::Processing(format!("resize failed: {e}")))?;

    Ok(dst)
}
