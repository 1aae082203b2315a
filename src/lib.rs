//! mini-rag: a minimal retrieval-augmented-generation HTTP service
//!
//! Stores text documents in a persistent vector collection, retrieves the
//! single nearest document for an incoming question, and asks a locally
//! hosted Ollama model to answer the question grounded in that document.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use pipeline::QueryPipeline;
pub use store::{Collection, RetrievalResult, VectorStore};
pub use types::response::{AddResponse, HealthResponse, QueryResponse};
