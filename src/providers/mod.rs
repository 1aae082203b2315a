//! Provider abstractions for embeddings and answer generation
//!
//! Trait seams so the store and pipeline can be exercised with fakes in
//! tests and wired to Ollama in the binaries.

pub mod embedding;
pub mod llm;
pub mod ollama;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use ollama::{OllamaClient, OllamaEmbedder, OllamaLlm};
