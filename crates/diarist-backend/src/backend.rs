//! The text-analysis backend capability.
//!
//! A backend only completes prompts. Every domain prompt lives with the
//! extractor that issues it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use diarist_core::{Error, Result};

/// Prompt in, text out.
#[async_trait]
pub trait TextAnalysisBackend: Send + Sync {
    /// Complete `prompt`.
    ///
    /// Fails with [`Error::BackendUnavailable`] when the call cannot be made
    /// and [`Error::Backend`] when the service answers with a non-success
    /// status.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Build an HTTP client with the given request timeout.
pub(crate) fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Send a prepared request and return the body of a successful response.
pub(crate) async fn send(request: RequestBuilder, label: &str) -> Result<String> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::BackendUnavailable(format!("{} request failed: {}", label, e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::BackendUnavailable(format!("{} body read failed: {}", label, e)))?;

    if !status.is_success() {
        return Err(Error::Backend {
            status: status.as_u16(),
            body,
        });
    }

    debug!("{} answered {} ({} bytes)", label, status, body.len());
    Ok(body)
}
