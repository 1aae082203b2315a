//! Document ingestion: dynamic adds and file seeding

use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::store::Collection;

/// Insert submitted text as a new document under a fresh random id and
/// return the generated id.
pub async fn add_text(collection: &Arc<Collection>, text: &str) -> Result<String> {
    let id = Uuid::new_v4().to_string();

    collection
        .add(&[text.to_string()], &[id.clone()])
        .await?;

    tracing::info!(
        "Added document '{}' to collection '{}'",
        id,
        collection.name()
    );

    Ok(id)
}

/// Read a whole file as one document and store it under a fixed,
/// human-chosen id. Re-running replaces the previous entry for that id.
pub async fn seed_file(collection: &Arc<Collection>, path: &Path, id: &str) -> Result<()> {
    let text = tokio::fs::read_to_string(path).await?;

    collection
        .add(&[text], &[id.to_string()])
        .await?;

    tracing::info!(
        "Seeded '{}' as document '{}' in collection '{}'",
        path.display(),
        id,
        collection.name()
    );

    Ok(())
}
