//! Configuration for the RAG service

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Ollama/LLM configuration
    pub llm: LlmConfig,
    /// Vector store configuration
    pub store: StoreConfig,
}

impl RagConfig {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// `MODEL_NAME` selects the generation model (default: `tinyllama`).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(model) = std::env::var("MODEL_NAME") {
            config.llm.generate_model = model;
        }
        if let Ok(model) = std::env::var("EMBED_MODEL") {
            config.llm.embed_model = model;
        }
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            config.llm.base_url = url;
        }
        if let Ok(path) = std::env::var("RAG_DB_PATH") {
            config.store.path = PathBuf::from(path);
        }
        if let Ok(host) = std::env::var("RAG_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("RAG_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }

        config
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// LLM (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            generate_model: "tinyllama".to_string(),
            temperature: 0.3,
            timeout_secs: 120,
            max_retries: 2,
        }
    }
}

/// Vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the persisted collections. Reusing the same
    /// directory across restarts preserves previously ingested documents.
    pub path: PathBuf,
    /// Collection name
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./db"),
            collection: "docs".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_service() {
        let config = RagConfig::default();
        assert_eq!(config.llm.generate_model, "tinyllama");
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.store.collection, "docs");
        assert_eq!(config.store.path, PathBuf::from("./db"));
    }
}
