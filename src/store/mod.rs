//! Persistent vector store with named collections
//!
//! A `VectorStore` is a client rooted at a directory; each `Collection` is a
//! named set of documents persisted as JSON under that directory and ranked
//! by cosine similarity at query time. The collection embeds texts itself
//! through the injected [`EmbeddingProvider`], so callers hand it raw
//! strings on both the add and query sides.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;

/// A stored unit of text with its identifier and embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Unique identifier within the collection
    pub id: String,
    /// Document text
    pub text: String,
    /// Embedding vector
    pub embedding: Vec<f32>,
}

/// Ranked retrieval output. The outer list indexes queries, the inner list
/// indexes ranked results (possibly empty).
#[derive(Debug, Clone)]
pub struct RetrievalResult {
    /// Top-ranked document texts per query
    pub documents: Vec<Vec<String>>,
}

impl RetrievalResult {
    /// Best-match text for the first query, or the empty string when the
    /// search returned nothing.
    pub fn top_text(&self) -> &str {
        self.documents
            .first()
            .and_then(|ranked| ranked.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Persistent vector store client
pub struct VectorStore {
    dir: PathBuf,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl VectorStore {
    /// Open (or create) a store rooted at `dir`. The same directory reused
    /// across restarts preserves previously ingested documents.
    pub fn open(dir: impl Into<PathBuf>, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::StoreUnavailable(format!("Failed to create {:?}: {}", dir, e)))?;

        Ok(Self { dir, embedder })
    }

    /// Get an existing collection by name, or create it if it doesn't exist.
    pub fn get_or_create(&self, name: &str) -> Result<Collection> {
        let path = self.dir.join(format!("{}.json", name));
        let entries = Self::load_entries(&path);

        tracing::info!(
            "Opened collection '{}' with {} documents",
            name,
            entries.len()
        );

        Ok(Collection {
            name: name.to_string(),
            path,
            embedder: Arc::clone(&self.embedder),
            entries: RwLock::new(entries),
        })
    }

    /// Load persisted entries; a missing file is an empty collection and a
    /// corrupt file is logged and treated as empty rather than failing open.
    fn load_entries(path: &PathBuf) -> Vec<StoredDocument> {
        if !path.exists() {
            return Vec::new();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Vec<StoredDocument>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Failed to parse {:?}: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                Vec::new()
            }
        }
    }
}

/// A named, persistent grouping of documents supporting similarity search
pub struct Collection {
    name: String,
    path: PathBuf,
    embedder: Arc<dyn EmbeddingProvider>,
    entries: RwLock<Vec<StoredDocument>>,
}

impl Collection {
    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the collection holds no documents
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Insert documents under the given ids, embedding each text.
    ///
    /// Re-using an existing id replaces that entry in place (upsert), so the
    /// seed step stays re-runnable. Embedding or persistence failures are
    /// returned to the caller, never swallowed.
    pub async fn add(&self, documents: &[String], ids: &[String]) -> Result<()> {
        if documents.len() != ids.len() {
            return Err(Error::InvalidInput(format!(
                "documents/ids length mismatch: {} documents, {} ids",
                documents.len(),
                ids.len()
            )));
        }

        // Embed up front; the entries lock is never held across an await.
        let mut incoming = Vec::with_capacity(documents.len());
        for (text, id) in documents.iter().zip(ids) {
            let embedding = self.embedder.embed(text).await?;
            incoming.push(StoredDocument {
                id: id.clone(),
                text: text.clone(),
                embedding,
            });
        }

        {
            let mut entries = self.entries.write();
            for doc in incoming {
                if let Some(existing) = entries.iter_mut().find(|e| e.id == doc.id) {
                    tracing::info!(
                        "Replacing document '{}' in collection '{}'",
                        doc.id,
                        self.name
                    );
                    *existing = doc;
                } else {
                    entries.push(doc);
                }
            }
        }

        self.persist()
    }

    /// Rank stored documents against each query text and return the top
    /// `n_results` texts per query.
    ///
    /// An empty collection short-circuits to empty result lists without
    /// touching the embedder; an embedding failure here degrades to an empty
    /// result for that query instead of erroring, so an unreachable or
    /// misconfigured embedder never fails the query path outright.
    pub async fn query(&self, query_texts: &[String], n_results: usize) -> Result<RetrievalResult> {
        if self.is_empty() {
            return Ok(RetrievalResult {
                documents: vec![Vec::new(); query_texts.len()],
            });
        }

        let mut documents = Vec::with_capacity(query_texts.len());

        for q in query_texts {
            let query_embedding = match self.embedder.embed(q).await {
                Ok(embedding) => embedding,
                Err(e) => {
                    tracing::warn!(
                        "Embedding failed for query against '{}', returning empty results: {}",
                        self.name,
                        e
                    );
                    documents.push(Vec::new());
                    continue;
                }
            };

            let entries = self.entries.read();
            let mut ranked: Vec<(f32, &StoredDocument)> = entries
                .iter()
                .map(|doc| (cosine_similarity(&query_embedding, &doc.embedding), doc))
                .collect();

            ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
            ranked.truncate(n_results);

            documents.push(ranked.into_iter().map(|(_, doc)| doc.text.clone()).collect());
        }

        Ok(RetrievalResult { documents })
    }

    /// Write the current entries to disk
    fn persist(&self) -> Result<()> {
        let content = {
            let entries = self.entries.read();
            serde_json::to_string_pretty(&*entries)?
        };

        std::fs::write(&self.path, content).map_err(|e| {
            Error::StoreUnavailable(format!("Failed to persist {:?}: {}", self.path, e))
        })
    }
}

/// Cosine similarity between two vectors; zero-norm vectors score 0.0
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
