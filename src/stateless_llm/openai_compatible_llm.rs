use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::stateless_llm_interface::{ChatMessage, CompletionError, StatelessLLMInterface};

/// OpenAI compatible LLM implementation (OpenRouter by default)
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: Secret<String>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

impl OpenAICompatibleLLM {
    pub fn new(model: String, base_url: String, api_key: Secret<String>) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), "completion API responded");

        // Error statuses that still carry JSON fall through to `Empty`.
        let body: Value = serde_json::from_str(&raw)
            .map_err(|e| CompletionError::InvalidBody(format!("status {}: {}", status, e)))?;

        extract_completion_text(body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Read the reply at `choices[0].message.content`.
pub fn extract_completion_text(body: Value) -> Result<String, CompletionError> {
    let text = body
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    match text {
        Some(text) => Ok(text),
        None => Err(CompletionError::Empty { body }),
    }
}
