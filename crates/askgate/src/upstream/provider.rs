//! Upstream trait and the HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::error::UpstreamError;
use super::types::{Answer, AskPayload};

/// A service that answers questions.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Forward a question and return the service's response body.
    async fn ask(&self, question: &str) -> Result<Answer, UpstreamError>;
}

/// AI service reached over HTTP at `{base_url}/ask`.
pub struct HttpUpstream {
    client: Client,
    base_url: String,
}

impl HttpUpstream {
    /// Build a client with a whole-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn ask(&self, question: &str) -> Result<Answer, UpstreamError> {
        let url = format!("{}/ask", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&AskPayload { question })
            .send()
            .await?;

        let response = UpstreamError::check_response(response).await?;
        let body = response.bytes().await?;
        Answer::from_json_bytes(body)
    }
}
