use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::agent::{AgentConfig, OpenAiAgent};
use crate::config::Config;
use crate::routes::create_routes;
use crate::state::AppState;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "benefits_assistant=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the agent once and wire it into the Axum application
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    let agent = OpenAiAgent::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        AgentConfig::new(config.model.clone(), config.vector_store_id.clone()),
    )?;
    info!(
        "Agent '{}' bound to vector store {}",
        agent.config().name,
        config.vector_store_id
    );

    let state = AppState::new(
        Arc::new(agent),
        config.frontend_dir.clone(),
        &config.vector_store_id,
    );
    Ok(build_router(state))
}

/// Attach routes and middleware to the given shared state
pub fn build_router(state: AppState) -> Router {
    let frontend_dir = state.frontend_dir.clone();

    Router::new()
        .merge(create_routes(&frontend_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Mirrors any origin and allows credentials; narrow before production use.
        .layer(CorsLayer::very_permissive())
}
