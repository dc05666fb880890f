use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use gd_core::ServerConfig;
use gd_pipeline::PipelineSettings;

/// Shared request state: process-wide constants only, no mutability.
pub struct AppState {
    /// Ramp and scale factor, built once at startup.
    pub settings: Arc<PipelineSettings>,
    /// Upper bound on the `width` parameter.
    pub max_width: u32,
}

/// Build the shared state from the loaded configuration.
///
/// # Errors
/// Returns an error if the configured glyph ramp is invalid.
pub fn build_state(config: &ServerConfig) -> Result<AppState> {
    let settings = PipelineSettings::from_config(config)
        .context("invalid render configuration")?;
    Ok(AppState {
        settings: Arc::new(settings),
        max_width: config.max_width,
    })
}

/// Assemble the router. The body limit rejects oversized uploads
/// before any decode work happens.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/ascii", post(crate::routes::ascii))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(Arc::new(state))
}
