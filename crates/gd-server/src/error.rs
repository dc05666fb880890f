use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gd_core::RenderError;

/// Maps pipeline errors onto HTTP responses.
///
/// Client faults (missing upload, bad parameters) answer 400 with the
/// error text; server faults answer 500 with a generic message while
/// the detail goes to the log only.
pub struct ApiError(RenderError);

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_client_fault() {
            (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
        } else {
            log::error!("{}", self.0);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "could not process the image".to_string(),
            )
                .into_response()
        }
    }
}
