use crate::handlers::{ask_handler, health_check, homepage};
use crate::state::AppState;
use axum::{Router, routing::get, routing::post};
use std::path::Path;
use tower_http::services::ServeDir;

/// Creates and configures all application routes
pub fn create_routes(frontend_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/health", get(health_check))
        .route("/ask", post(ask_handler))
        .nest_service(
            "/static",
            ServeDir::new(frontend_dir).append_index_html_on_directories(false),
        )
}
