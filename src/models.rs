use serde::{Deserialize, Serialize};

/// Request payload for the ask endpoint
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response payload for the ask endpoint
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub answer: String,
}

/// Liveness report; names the collection the agent searches
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub vector_store_id: String,
}

impl HealthResponse {
    pub fn ok(vector_store_id: &str) -> Self {
        Self {
            status: "ok",
            vector_store_id: vector_store_id.to_string(),
        }
    }
}

impl QueryResponse {
    pub fn new(answer: String) -> Self {
        Self { answer }
    }
}
