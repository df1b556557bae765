//! The load stage: read the index file, normalize entries, and batch-write
//! them to the document store.

use anyhow::Context;

use placedex_core::AppConfig;
use placedex_store::{normalize_entry, read_index, FirestoreClient, ServiceAccountKey};

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let mut index = read_index(&config.index_path)
        .with_context(|| format!("reading index from {}", config.index_path.display()))?;
    tracing::info!(total = index.total(), "index loaded");

    for entry in index.entries_mut() {
        normalize_entry(entry);
    }

    let key = ServiceAccountKey::from_file(&config.credentials_path)
        .with_context(|| format!("loading credentials from {}", config.credentials_path.display()))?;
    let client = FirestoreClient::connect(&key, config.request_timeout_secs).await?;

    let docs = index
        .entries()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .context("serializing index entries")?;

    let written = client
        .write_all(&config.collection, &docs, config.batch_limit)
        .await?;
    tracing::info!(written, collection = %config.collection, "load complete");
    Ok(())
}
