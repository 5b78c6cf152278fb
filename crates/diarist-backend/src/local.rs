//! Local HTTP model server backend (Ollama-compatible `/api/generate`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::backend::{http_client, send, TextAnalysisBackend};
use crate::types::{GenerateRequest, GenerateResponse};
use diarist_core::{Error, Result};

/// Client for an unauthenticated local generation endpoint.
pub struct LocalBackend {
    client: Client,
    endpoint: String,
    model: String,
}

impl LocalBackend {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl TextAnalysisBackend for LocalBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!("Generating via {} with model {}", self.endpoint, self.model);

        let request = self.client.post(&self.endpoint).json(&body);
        let raw = send(request, "local").await?;
        parse_generation(&raw)
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Pull the `response` field out of a non-streaming generate body.
pub fn parse_generation(raw: &str) -> Result<String> {
    let parsed: GenerateResponse = serde_json::from_str(raw).map_err(|e| Error::Backend {
        status: 200,
        body: format!("unparseable generation ({}): {}", e, raw),
    })?;

    match parsed.response {
        Some(text) => Ok(text.trim().to_string()),
        None => {
            warn!("Local generation had no response field");
            Ok(String::new())
        }
    }
}
