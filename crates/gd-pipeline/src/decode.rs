use gd_core::{Raster, RenderError};

/// Decode image bytes (PNG, JPEG, BMP, GIF) into an RGBA raster.
///
/// # Errors
/// Returns [`RenderError::Decode`] for unsupported or corrupt bytes.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, RenderError> {
    let img = image::load_from_memory(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_rgba(rgba.into_raw(), width, height)
        .ok_or_else(|| RenderError::Processing("decoded buffer size mismatch".to_string()))
}
