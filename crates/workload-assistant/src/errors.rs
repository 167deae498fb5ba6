use thiserror::Error;

/// Failures talking to the text-generation service
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("No API key configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Service returned no completion")]
    EmptyResponse,
}
