use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use gd_core::RenderError;
use gd_core::params::{RawRenderParams, RenderParams};

use crate::app::AppState;
use crate::error::ApiError;

/// `POST /ascii` — multipart image upload → plain-text ASCII grid.
///
/// Parameters are validated before the body is touched, so malformed
/// numbers never reach the decoder, let alone the tone-curve math.
pub async fn ascii(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawRenderParams>,
    multipart: Multipart,
) -> Result<String, ApiError> {
    let params = RenderParams::resolve(&raw, state.max_width)?;
    let bytes = read_upload(multipart).await?;

    // The pipeline is synchronous CPU work; keep it off the IO workers.
    let settings = Arc::clone(&state.settings);
    let text = tokio::task::spawn_blocking(move || {
        gd_pipeline::render_ascii(&bytes, &params, &settings)
    })
    .await
    .map_err(|e| RenderError::Processing(format!("render task failed: {e}")))??;

    Ok(text)
}

/// Pull the uploaded image out of the multipart body.
///
/// Accepts a field named `image`, or the first field carrying a
/// filename. Missing or empty uploads are [`RenderError::NoInput`].
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, RenderError> {
    while let Some(field) = multipart.next_field().await.map_err(malformed_body)? {
        let is_image_field = field.name() == Some("image") || field.file_name().is_some();
        if !is_image_field {
            continue;
        }
        let bytes = field.bytes().await.map_err(malformed_body)?;
        if bytes.is_empty() {
            return Err(RenderError::NoInput);
        }
        return Ok(bytes.to_vec());
    }
    Err(RenderError::NoInput)
}

fn malformed_body(e: axum::extract::multipart::MultipartError) -> RenderError {
    RenderError::InvalidParameter {
        name: "image",
        reason: format!("malformed multipart body: {e}"),
    }
}
