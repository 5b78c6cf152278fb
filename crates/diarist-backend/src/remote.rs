//! Remote, key-authenticated chat-completion backend (OpenAI-compatible).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::backend::{http_client, send, TextAnalysisBackend};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use diarist_core::{Error, Result};

const TEMPERATURE: f64 = 0.3;

/// Client for `POST {endpoint}` with a bearer API key.
pub struct RemoteBackend {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl RemoteBackend {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl TextAnalysisBackend for RemoteBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        };

        debug!("Completing via {} with model {}", self.endpoint, self.model);

        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body);
        let raw = send(request, "remote").await?;
        parse_completion(&raw)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// Pull the first choice's content out of a chat-completion body.
///
/// A body that is not a completion envelope is a backend error; an envelope
/// without choices is an empty completion.
pub fn parse_completion(raw: &str) -> Result<String> {
    let parsed: ChatCompletionResponse =
        serde_json::from_str(raw).map_err(|e| Error::Backend {
            status: 200,
            body: format!("unparseable completion ({}): {}", e, raw),
        })?;

    match parsed.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content.trim().to_string()),
        None => {
            warn!("Remote completion had no choices");
            Ok(String::new())
        }
    }
}
