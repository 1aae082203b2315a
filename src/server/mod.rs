//! HTTP server for the RAG service

pub mod routes;
pub mod state;

use axum::Router;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::RagConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// RAG HTTP server
pub struct RagServer {
    config: RagConfig,
    state: AppState,
}

impl RagServer {
    /// Create a new server over Ollama-backed state
    pub fn new(config: RagConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Create with explicitly assembled state (used by tests)
    pub fn with_state(config: RagConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }

    /// Start serving
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = build_router(self.state);

        tracing::info!("Starting RAG server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::LlmProvider;
    use crate::store::VectorStore;
    use crate::testutil::{FailingEmbedder, FailingLlm, HashEmbedder, RecordingLlm};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router(
        tmp: &tempfile::TempDir,
        embedder: Arc<dyn crate::providers::EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Router {
        let store = VectorStore::open(tmp.path(), embedder).unwrap();
        let collection = Arc::new(store.get_or_create("docs").unwrap());
        let state = AppState::from_parts(RagConfig::default(), collection, llm);
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_status_ok_with_unreachable_providers() {
        let tmp = tempfile::tempdir().unwrap();
        let router = test_router(&tmp, Arc::new(FailingEmbedder), Arc::new(FailingLlm));

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"status": "ok"})
            );
        }
    }

    #[tokio::test]
    async fn query_returns_answer_payload() {
        let tmp = tempfile::tempdir().unwrap();
        let router = test_router(
            &tmp,
            Arc::new(HashEmbedder),
            Arc::new(RecordingLlm::with_answer("An orchestrator.")),
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/query?q=What%20is%20Kubernetes%3F")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"answer": "An orchestrator."})
        );
    }

    #[tokio::test]
    async fn query_without_q_is_rejected_by_the_extractor() {
        let tmp = tempfile::tempdir().unwrap();
        let router = test_router(
            &tmp,
            Arc::new(HashEmbedder),
            Arc::new(RecordingLlm::with_answer("x")),
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/query")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn query_maps_generation_failure_to_structured_503() {
        let tmp = tempfile::tempdir().unwrap();
        let router = test_router(&tmp, Arc::new(HashEmbedder), Arc::new(FailingLlm));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/query?q=anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "llm_error");
    }

    #[tokio::test]
    async fn add_returns_success_with_generated_id() {
        let tmp = tempfile::tempdir().unwrap();
        let router = test_router(
            &tmp,
            Arc::new(HashEmbedder),
            Arc::new(RecordingLlm::with_answer("x")),
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add?text=Kubernetes%20is%20great")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert!(!json["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_reports_failures_as_structured_payload_not_transport_error() {
        let tmp = tempfile::tempdir().unwrap();
        let router = test_router(&tmp, Arc::new(FailingEmbedder), Arc::new(FailingLlm));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add?text=anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Ingestion never raises; the error comes back in-band.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().contains("unreachable"));
        assert!(json.get("id").is_none());
    }

    #[tokio::test]
    async fn added_document_is_retrievable_as_context() {
        let tmp = tempfile::tempdir().unwrap();
        let llm = Arc::new(RecordingLlm::with_answer("grounded answer"));
        let router = test_router(&tmp, Arc::new(HashEmbedder), llm.clone());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add?text=Kubernetes%20is%20a%20container%20orchestration%20system.")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await["status"], "success");

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/query?q=What%20is%20Kubernetes%3F")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("Kubernetes is a container orchestration system."));
    }
}
