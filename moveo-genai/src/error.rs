use thiserror::Error;

/// Errors surfaced to callers of the text generator. The message is shown to
/// the user verbatim, so the underlying cause is kept out of it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("API key not configured.")]
    NotConfigured,

    #[error("Failed to generate marketing description.")]
    MarketingDescription { cause: String },

    #[error("Failed to generate itinerary.")]
    Itinerary { cause: String },
}

/// Transport level failures of a single generateContent call
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Received an empty response from the model.")]
    EmptyResponse,
}
