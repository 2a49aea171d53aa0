use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::stateless_llm::CompletionError;

/// Body text sent when generation yields nothing usable.
pub const TRANSLATION_FAILED: &str = "Translation failed.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("missing required fields")]
    MissingFields,

    #[error("invalid tone specified: {0}")]
    InvalidTone(String),

    #[error("invalid request body: {0}")]
    MalformedBody(String),

    #[error("completion API returned no text: {body}")]
    EmptyResponse { body: serde_json::Value },

    #[error("upstream failure: {0}")]
    Upstream(#[from] CompletionError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingFields
            | RelayError::InvalidTone(_)
            | RelayError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            RelayError::EmptyResponse { .. } | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            RelayError::MissingFields => json!({ "error": "Missing required fields" }),
            RelayError::InvalidTone(_) => json!({ "error": "Invalid tone specified" }),
            RelayError::MalformedBody(_) => json!({ "error": "Invalid request body" }),
            RelayError::EmptyResponse { body } => {
                error!("Empty response from API: {}", body);
                json!({ "translation": TRANSLATION_FAILED })
            }
            RelayError::Upstream(e) => {
                error!("Translation request failed: {}", e);
                json!({ "error": "Server Error" })
            }
        };
        (status, Json(body)).into_response()
    }
}
