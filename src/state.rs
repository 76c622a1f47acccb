use std::path::PathBuf;
use std::sync::Arc;

use crate::agent::AgentClient;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<dyn AgentClient>,
    pub frontend_dir: Arc<PathBuf>,
    pub vector_store_id: Arc<str>,
}

impl AppState {
    pub fn new(
        agent: Arc<dyn AgentClient>,
        frontend_dir: impl Into<PathBuf>,
        vector_store_id: &str,
    ) -> Self {
        Self {
            agent,
            frontend_dir: Arc::new(frontend_dir.into()),
            vector_store_id: Arc::from(vector_store_id),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.frontend_dir.join("index.html")
    }
}
