use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_VECTOR_STORE_ID: &str = "vs_6868f43e68b48191905129c5a089c159";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub vector_store_id: String,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "8000");
        let port = port
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid number, got {port:?}"))?;

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            frontend_dir: PathBuf::from(var("FRONTEND_DIR", "frontend")),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()),
            openai_base_url: var("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            model: var("OPENAI_MODEL", DEFAULT_MODEL),
            vector_store_id: var("VECTOR_STORE_ID", DEFAULT_VECTOR_STORE_ID),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

// Keeps the credential out of startup logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("frontend_dir", &self.frontend_dir)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "***"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("vector_store_id", &self.vector_store_id)
            .finish()
    }
}
