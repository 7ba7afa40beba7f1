use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationClientError {
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid request url: {0}")]
    InvalidUrl(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
