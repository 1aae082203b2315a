//! Seed binary: store one file as a single document under a fixed id
//!
//! Run with: cargo run --bin mini-rag-seed [path] [id]
//! Defaults to `k8s.txt` under id `k8s`. Re-running replaces the entry.

use std::path::PathBuf;
use std::sync::Arc;

use mini_rag::config::RagConfig;
use mini_rag::ingestion;
use mini_rag::providers::OllamaEmbedder;
use mini_rag::store::VectorStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_rag=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("k8s.txt"));
    let id = args.get(2).map(String::as_str).unwrap_or("k8s");

    let config = RagConfig::from_env();

    let embedder = Arc::new(OllamaEmbedder::new(&config.llm));
    let store = VectorStore::open(&config.store.path, embedder)?;
    let collection = Arc::new(store.get_or_create(&config.store.collection)?);

    ingestion::seed_file(&collection, &path, id).await?;

    println!(
        "Stored '{}' as document '{}' in collection '{}'",
        path.display(),
        id,
        collection.name()
    );

    Ok(())
}
