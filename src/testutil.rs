//! Deterministic fake providers for tests

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::providers::{EmbeddingProvider, LlmProvider};

const DIMS: usize = 128;

/// Deterministic bag-of-words embedder: each lowercase word increments a
/// hashed dimension, so cosine similarity tracks word overlap. Good enough
/// to make nearest-neighbor assertions stable without a model.
pub struct HashEmbedder;

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; DIMS];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            vector[(hasher.finish() as usize) % DIMS] += 1.0;
        }
        Ok(vector)
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "hash-embedder"
    }
}

/// Embedder that always fails, standing in for an unreachable engine
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(Error::Embedding("embedding engine unreachable".to_string()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}

/// LLM fake that records every prompt it sees and replies with a canned
/// answer, so tests can assert on the exact prompt sent downstream.
#[derive(Default)]
pub struct RecordingLlm {
    pub prompts: Mutex<Vec<String>>,
    pub answer: String,
}

impl RecordingLlm {
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            answer: answer.into(),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for RecordingLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.answer.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "recording-llm"
    }

    fn model(&self) -> &str {
        "fake"
    }
}

/// LLM fake that always fails, standing in for an unreachable engine
pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::Llm("generation engine unreachable".to_string()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing-llm"
    }

    fn model(&self) -> &str {
        "fake"
    }
}
