use thiserror::Error;

/// Errors produced on the request path of the image-to-glyph pipeline.
///
/// The first two variants are client faults and are surfaced verbatim;
/// the last two are server faults whose detail stays in the logs.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Aucun fichier uploadé, ou corps vide.
    #[error("no image file uploaded")]
    NoInput,

    /// Malformed or out-of-domain query parameter.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the query string.
        name: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// Unsupported or corrupt image bytes.
    #[error("could not decode image: {0}")]
    Decode(String),

    /// Unexpected internal failure during resample/enhance/map.
    #[error("image processing failed: {0}")]
    Processing(String),
}

impl RenderError {
    /// True when the error is the client's fault (400-class).
    #[must_use]
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::NoInput | Self::InvalidParameter { .. })
    }
}
