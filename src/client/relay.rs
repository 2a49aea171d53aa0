use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::translate::{TranslateRequest, TranslateResponse};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach relay: {0}")]
    Transport(String),

    #[error("relay returned an unreadable body: {0}")]
    InvalidBody(String),

    #[error("relay answered {status}: {message}")]
    Relay { status: u16, message: String },
}

/// One round trip to the relay endpoint.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ClientError>;
}

/// Relay client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: Client,
    base_url: String,
}

impl HttpRelay {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Every body shape the relay can answer with.
#[derive(Debug, Default, Deserialize)]
struct RelayReply {
    translation: Option<String>,
    #[serde(rename = "sourceLang")]
    source_lang: Option<String>,
    error: Option<String>,
}

impl RelayReply {
    /// A `translation` field is shown even on error statuses ("Translation failed.").
    fn into_result(self, status: u16) -> Result<TranslateResponse, ClientError> {
        match self.translation {
            Some(translation) => Ok(TranslateResponse {
                translation,
                source_lang: self.source_lang,
            }),
            None => Err(ClientError::Relay {
                status,
                message: self
                    .error
                    .unwrap_or_else(|| "response carried no translation".to_string()),
            }),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let reply: RelayReply = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidBody(e.to_string()))?;

        reply.into_result(status)
    }
}
