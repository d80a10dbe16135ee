//! Ingest command implementation.

use anyhow::{Context, Result};
use prashna_core::extract::{PlainTextExtractor, TextExtractor};
use prashna_core::retrieval::RetrievalEngine;
use prashna_core::storage::JsonChunkStore;
use std::path::Path;
use tracing::info;

/// Extracts a document's text and appends its chunks to the store.
///
/// Returns the number of chunks added. Extraction failures (missing file,
/// unsupported format) abort the command; an empty document adds nothing
/// and succeeds.
pub async fn execute_ingest(file: &Path, store_path: &Path) -> Result<usize> {
    let extractor = PlainTextExtractor::new();
    let text = extractor
        .extract(file)
        .await
        .with_context(|| format!("Failed to extract text from {}", file.display()))?;

    info!(chars = text.chars().count(), "extracted document text");

    let engine = RetrievalEngine::new(JsonChunkStore::open(store_path));
    let added = engine
        .ingest(&text)
        .await
        .with_context(|| format!("Failed to update {}", store_path.display()))?;

    info!(added, store = %store_path.display(), "ingest complete");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ingest_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("kb.json");
        let result = execute_ingest(Path::new("/nonexistent/doc.md"), &store).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_ingest_counts_chunks() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("doc.txt");
        std::fs::write(&doc, "a short document").unwrap();
        let store = dir.path().join("kb.json");

        let added = execute_ingest(&doc, &store).await.unwrap();
        assert_eq!(added, 1);
    }
}
