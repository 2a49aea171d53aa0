use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_vs_hi_translator::config::Config;
use ai_vs_hi_translator::routes;
use ai_vs_hi_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ai_vs_hi_translator=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load().context("failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    // Not fatal: every /translate call will fail upstream instead.
    if !config.has_credentials() {
        warn!("OPENROUTER_API_KEY or MODEL_ID is not set; translations will fail");
    }

    let addr = config.bind_address();
    let app_state = AppState::new(config);

    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server is running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
