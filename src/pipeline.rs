//! The query-and-generate pipeline
//!
//! One conceptual flow per request: top-1 retrieval against the collection,
//! context selection, prompt assembly, generation, and response shaping in
//! the handler. Providers are injected so the pipeline runs against fakes
//! in tests and Ollama in production.

use std::sync::Arc;

use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::providers::LlmProvider;
use crate::store::Collection;

/// Answers natural-language questions grounded in the single most relevant
/// stored document.
pub struct QueryPipeline {
    collection: Arc<Collection>,
    llm: Arc<dyn LlmProvider>,
}

impl QueryPipeline {
    /// Create a pipeline over a collection and a generation provider
    pub fn new(collection: Arc<Collection>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { collection, llm }
    }

    /// The collection this pipeline retrieves from
    pub fn collection(&self) -> &Arc<Collection> {
        &self.collection
    }

    /// Answer a question using the nearest stored document as context.
    ///
    /// An empty collection (or a degraded retrieval) produces an ungrounded
    /// generation with an empty context section, never an error. Generation
    /// failures surface as typed errors for the transport layer to map.
    pub async fn ask(&self, q: &str) -> Result<String> {
        let retrieved = self.collection.query(&[q.to_string()], 1).await?;
        let context = retrieved.top_text();

        if context.is_empty() {
            tracing::debug!("No context retrieved, generating ungrounded answer");
        }

        let prompt = PromptBuilder::answer_prompt(context, q);
        let answer = self.llm.generate(&prompt).await?;

        tracing::info!("Query: \"{}\"", q);

        Ok(answer)
    }
}
