use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::RelayError;
use crate::state::AppState;
use crate::translate::languages::{DETECTION_LABELS, LANGUAGES};
use crate::translate::{TranslateRequestBody, TranslateResponse};

pub const LIVENESS_TEXT: &str = "AI vs HI Translator Backend is Running";

pub fn create_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/translate", post(translate))
        .route("/languages", get(languages))
        .route("/api/health", get(health_check))
        // Browser form
        .nest_service("/app", ServeDir::new(&state.config.static_dir))
}

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequestBody>, JsonRejection>,
) -> Result<Json<TranslateResponse>, RelayError> {
    let Json(body) = payload.map_err(|e| RelayError::MalformedBody(e.body_text()))?;

    let span = tracing::info_span!(
        "translate",
        request_id = %Uuid::new_v4(),
        tone = body.tone.as_deref().unwrap_or(""),
    );

    let response = state.pipeline.handle(body).instrument(span).await?;
    Ok(Json(response))
}

async fn languages() -> Json<Value> {
    Json(json!({
        "languages": LANGUAGES,
        "detectionLabels": DETECTION_LABELS,
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.pipeline.model(),
        "credentialConfigured": state.config.has_credentials(),
    }))
}
