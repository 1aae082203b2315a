//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::pipeline::QueryPipeline;
use crate::providers::{LlmProvider, OllamaClient, OllamaEmbedder, OllamaLlm};
use crate::store::{Collection, VectorStore};

/// Shared application state
///
/// The collection handle and generation client are constructed once at
/// startup and reused across all requests; nothing here is request-scoped.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// The collection all requests share
    collection: Arc<Collection>,
    /// Query-and-generate pipeline
    pipeline: QueryPipeline,
}

impl AppState {
    /// Create application state wired to Ollama, sharing one HTTP client
    /// between the embedding and generation providers.
    pub fn new(config: RagConfig) -> Result<Self> {
        tracing::info!("Initializing application state...");
        tracing::info!("Using model: {}", config.llm.generate_model);

        let client = Arc::new(OllamaClient::new(&config.llm));
        let embedder = Arc::new(OllamaEmbedder::from_client(Arc::clone(&client)));
        let llm: Arc<dyn LlmProvider> = Arc::new(OllamaLlm::from_client(
            client,
            config.llm.generate_model.clone(),
        ));

        let store = VectorStore::open(&config.store.path, embedder)?;
        let collection = Arc::new(store.get_or_create(&config.store.collection)?);

        Ok(Self::from_parts(config, collection, llm))
    }

    /// Assemble state from already-built parts. This is the injection seam
    /// the tests use to run the full router against fake providers.
    pub fn from_parts(
        config: RagConfig,
        collection: Arc<Collection>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        let pipeline = QueryPipeline::new(Arc::clone(&collection), llm);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                collection,
                pipeline,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the shared collection
    pub fn collection(&self) -> &Arc<Collection> {
        &self.inner.collection
    }

    /// Get the query pipeline
    pub fn pipeline(&self) -> &QueryPipeline {
        &self.inner.pipeline
    }
}
