use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AgentClient, AgentConfig, HostedTool};

/// Agent backed by the hosted OpenAI Responses API.
///
/// The file search tool runs server-side, so one request is a full agent turn:
/// the service searches the bound vector store and returns the final message.
#[derive(Debug, Clone)]
pub struct OpenAiAgent {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    config: AgentConfig,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    tools: [&'a HostedTool; 1],
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    OutputText { text: String },
    Refusal { refusal: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

impl OpenAiAgent {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        config: AgentConfig,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
            config,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AgentClient for OpenAiAgent {
    async fn ask(&self, question: &str) -> anyhow::Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY is not set"))?;

        let request = ResponsesRequest {
            model: &self.config.model,
            instructions: &self.config.instructions,
            input: question,
            tools: [&self.config.file_search],
        };

        info!(
            "Running agent '{}' on model {}",
            self.config.name, self.config.model
        );

        let response = self
            .client
            .post(self.responses_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        info!("Received response status: {}", status);

        let body = response.text().await?;
        debug!("Response body: {}", body);

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(anyhow::anyhow!("Error code: {} - {}", status.as_u16(), message));
        }

        let response: ResponsesResponse = serde_json::from_str(&body)?;
        final_output(response)
    }
}

/// Text of the last message the agent produced.
fn final_output(response: ResponsesResponse) -> anyhow::Result<String> {
    if let Some(error) = response.error {
        return Err(anyhow::anyhow!(error.message));
    }

    let content = response
        .output
        .into_iter()
        .filter_map(|item| match item {
            OutputItem::Message { content } => Some(content),
            OutputItem::Other => None,
        })
        .last()
        .ok_or_else(|| anyhow::anyhow!("Agent produced no message output"))?;

    let mut answer = String::new();
    for part in content {
        match part {
            ContentPart::OutputText { text } => answer.push_str(&text),
            // a refusal is still the agent's final word
            ContentPart::Refusal { refusal } => answer.push_str(&refusal),
            ContentPart::Other => {}
        }
    }
    Ok(answer)
}
