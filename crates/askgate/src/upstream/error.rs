//! Upstream error types.

use thiserror::Error;

/// Errors that can occur when forwarding a question to the AI service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Service answered with a body that is not JSON
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The forwarding task panicked before producing a result
    #[error("upstream call panicked: {0}")]
    Panicked(String),
}

impl UpstreamError {
    /// Check an HTTP response status, returning `Api` for anything non-2xx.
    pub async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, Self> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(UpstreamError::Api { status, message })
    }
}
