//! HTTP client helpers for tests.

use rubric_eval::gateway::{ErrorResponse, EvaluationResponse, WelcomeResponse};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Posts `body` to `/evaluate-feedback`, returning the scores and the status header.
    pub async fn evaluate(
        &self,
        body: &serde_json::Value,
    ) -> Result<(EvaluationResponse, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/evaluate-feedback"))
            .json(body)
            .send()
            .await?;

        let status_header = resp
            .headers()
            .get("x-evaluator-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            status => {
                let body: ErrorResponse = resp.json().await?;
                Err(TestClientError::Rejected(status, body))
            }
        }
    }

    pub async fn welcome(&self) -> Result<WelcomeResponse, TestClientError> {
        let resp = self.client.get(self.url("/")).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }

    pub async fn ready(&self) -> Result<serde_json::Value, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Request rejected with {0}: {1:?}")]
    Rejected(u16, ErrorResponse),
}
