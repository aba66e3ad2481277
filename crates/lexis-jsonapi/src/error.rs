/// Anything that goes wrong between sending the request and building an entry
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Drupal API returned {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Malformed entry: {0}")]
    MalformedEntry(String),
}
