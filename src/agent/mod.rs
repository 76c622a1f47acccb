pub mod openai;

use async_trait::async_trait;
use serde::Serialize;

pub use openai::OpenAiAgent;

/// Maximum number of document chunks the file search tool returns per query.
pub const MAX_NUM_RESULTS: u32 = 5;

/// Phrase the agent is told to answer with when the collection has nothing relevant.
pub const FALLBACK_ANSWER: &str = "I don't know";

pub const AGENT_NAME: &str = "Assistant";

pub const AGENT_INSTRUCTIONS: &str = "You're a helpful assistant. Use *only* the provided vector store to find the information. \
If you can’t find the answer, simply reply with 'I don't know'.";

/// A conversational agent that answers a single question.
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn ask(&self, question: &str) -> anyhow::Result<String>;
}

/// Hosted tool restricting the agent to one document collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostedTool {
    FileSearch {
        vector_store_ids: Vec<String>,
        max_num_results: u32,
    },
}

impl HostedTool {
    pub fn file_search(vector_store_id: impl Into<String>) -> Self {
        HostedTool::FileSearch {
            vector_store_ids: vec![vector_store_id.into()],
            max_num_results: MAX_NUM_RESULTS,
        }
    }
}

/// Process-wide agent definition, built once at startup.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    pub instructions: String,
    pub file_search: HostedTool,
}

impl AgentConfig {
    pub fn new(model: impl Into<String>, vector_store_id: impl Into<String>) -> Self {
        Self {
            name: AGENT_NAME.to_string(),
            model: model.into(),
            instructions: AGENT_INSTRUCTIONS.to_string(),
            file_search: HostedTool::file_search(vector_store_id),
        }
    }
}
