use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag of a single chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Why a completion produced no usable text.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion API failed: {0}")]
    Transport(String),

    #[error("completion API returned a non-JSON body: {0}")]
    InvalidBody(String),

    /// The body parsed but carried no text at `choices[0].message.content`.
    #[error("completion API returned no text")]
    Empty { body: serde_json::Value },
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one chat completion and return the trimmed reply text.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;

    /// Model identifier the completions are requested from.
    fn model(&self) -> &str;
}
