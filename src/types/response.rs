//! Response shapes for the HTTP surface

use serde::{Deserialize, Serialize};

/// Response for `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The generated answer text, unprocessed
    pub answer: String,
}

impl QueryResponse {
    /// Wrap generated text as the response payload
    pub fn new(answer: String) -> Self {
        Self { answer }
    }
}

/// Response for `POST /add`. Ingestion never surfaces a transport error;
/// failures come back in this same shape with `status: "error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    /// `"success"` or `"error"`
    pub status: String,
    /// Human-readable outcome description
    pub message: String,
    /// Generated document id, present on success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AddResponse {
    /// Successful insertion with the generated id
    pub fn success(id: String) -> Self {
        Self {
            status: "success".to_string(),
            message: "Content added to knowledge base".to_string(),
            id: Some(id),
        }
    }

    /// Structured failure carrying the error description
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            id: None,
        }
    }
}

/// Response for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: String,
}

impl HealthResponse {
    /// The constant liveness payload
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
