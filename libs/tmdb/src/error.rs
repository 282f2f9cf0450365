use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response from server")]
    InvalidResponse,

    #[error("API error: {status_code} - {message}")]
    Server { status_code: u16, message: String },

    #[error("Failed to decode response at {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
