use crate::error::AppResult;
use crate::models::{HealthResponse, QueryRequest, QueryResponse};
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    response::{Html, Json as ResponseJson},
};
use tracing::{debug, info};

/// Reports liveness without calling the agent
pub async fn health_check(State(state): State<AppState>) -> ResponseJson<HealthResponse> {
    debug!("Health check endpoint called");
    ResponseJson(HealthResponse::ok(&state.vector_store_id))
}

/// Serves the frontend entry page, read from disk on every request.
pub async fn homepage(State(state): State<AppState>) -> AppResult<Html<String>> {
    let index_path = state.index_path();
    debug!("Serving homepage from {}", index_path.display());

    let html = tokio::fs::read_to_string(&index_path).await?;
    Ok(Html(html))
}

/// Ask handler
/// Forwards the query to the agent and returns its answer unchanged
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> AppResult<ResponseJson<QueryResponse>> {
    info!("Ask endpoint called with query: {}", payload.query);

    let answer = state.agent.ask(&payload.query).await?;

    info!("Successfully processed query, returning response");
    Ok(ResponseJson(QueryResponse::new(answer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentClient;
    use crate::error::AppError;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubAgent {
        result: Result<String, String>,
    }

    #[async_trait]
    impl AgentClient for StubAgent {
        async fn ask(&self, _question: &str) -> anyhow::Result<String> {
            self.result.clone().map_err(|msg| anyhow::anyhow!(msg))
        }
    }

    fn state_with(result: Result<String, String>, frontend_dir: &str) -> AppState {
        AppState::new(Arc::new(StubAgent { result }), frontend_dir, "vs_test")
    }

    #[tokio::test]
    async fn test_health_check_reports_vector_store() {
        let state = state_with(Ok(String::new()), "frontend");
        let ResponseJson(response) = health_check(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.vector_store_id, "vs_test");
    }

    #[tokio::test]
    async fn test_ask_handler_passes_answer_through() {
        let state = state_with(Ok("  Yes, *with* a copay.\n".to_string()), "frontend");
        let request = QueryRequest {
            query: "Is physio covered?".to_string(),
        };

        let ResponseJson(response) = ask_handler(State(state), Json(request)).await.unwrap();
        assert_eq!(response.answer, "  Yes, *with* a copay.\n");
    }

    #[tokio::test]
    async fn test_ask_handler_accepts_empty_query() {
        let state = state_with(Ok("I don't know".to_string()), "frontend");
        let request = QueryRequest {
            query: String::new(),
        };

        let result = ask_handler(State(state), Json(request)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_ask_handler_maps_agent_failure() {
        let state = state_with(Err("quota exceeded".to_string()), "frontend");
        let request = QueryRequest {
            query: "anything".to_string(),
        };

        match ask_handler(State(state), Json(request)).await {
            Err(AppError::Agent(err)) => assert_eq!(err.to_string(), "quota exceeded"),
            other => panic!("expected agent error, got {:?}", other.map(|r| r.0)),
        }
    }

    #[tokio::test]
    async fn test_homepage_missing_file_is_io_error() {
        let state = state_with(Ok(String::new()), "/nonexistent/frontend/dir");

        let result = homepage(State(state)).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
