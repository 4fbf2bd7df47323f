use thiserror::Error;

pub type Result<T> = std::result::Result<T, XError>;

#[derive(Debug, Error)]
pub enum XError {
    /// Token was empty; nothing was sent.
    #[error("Bearer token is not configured")]
    MissingToken,

    /// No HTTP status came back (connect failure, per-request timeout).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}
