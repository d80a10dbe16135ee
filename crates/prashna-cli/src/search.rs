//! Search command implementation.

use anyhow::{anyhow, Context, Result};
use prashna_core::retrieval::RetrievalEngine;
use prashna_core::storage::JsonChunkStore;
use std::path::Path;
use tracing::info;

/// Searches the knowledge base for chunks matching the query.
///
/// Returns up to `limit` chunk contents in storage insertion order.
pub async fn execute_search(query: &str, limit: usize, store_path: &Path) -> Result<Vec<String>> {
    if !store_path.exists() {
        return Err(anyhow!(
            "No knowledge base found at {}.\n\
             Ingest a document first: prashna ingest <file>",
            store_path.display()
        ));
    }

    let store = JsonChunkStore::open(store_path);
    let engine = RetrievalEngine::new(store).with_top_k(limit);

    info!(query, limit, "searching knowledge base");
    let results = engine
        .search(query)
        .await
        .with_context(|| format!("Failed to search {}", store_path.display()))?;

    info!(hits = results.len(), "search complete");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_search_missing_store_fails() {
        let result = execute_search("test", 3, Path::new("/nonexistent/kb.json")).await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("No knowledge base found"));
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let dir = TempDir::new().unwrap();
        let store_path = dir.path().join("kb.json");

        let engine = RetrievalEngine::new(JsonChunkStore::open(&store_path));
        engine.ingest("the quick brown fox").await.unwrap();

        let results = execute_search("quick", 3, &store_path).await.unwrap();
        assert_eq!(results, vec!["the quick brown fox".to_string()]);
    }
}
