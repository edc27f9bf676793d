//! HTTP client abstraction for testability

use std::future::Future;
use std::time::Duration;

use super::error::ImageryError;

/// Status and raw body of a completed HTTP exchange.
///
/// Non-success statuses are returned as data rather than errors so the
/// caller can report the body text the service sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for async HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The fully built request URL
    ///
    /// # Returns
    ///
    /// The response status and body, or a transport error if no response
    /// was received.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, ImageryError>> + Send;
}

/// Real HTTP client implementation using async reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with no request timeout.
    pub fn new() -> Result<Self, ImageryError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            ImageryError::Transport(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ImageryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                ImageryError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, ImageryError> {
        // URLs carry the access token, keep them out of error messages
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageryError::Transport(e.without_url().to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| ImageryError::Transport(e.without_url().to_string()))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
