//! Chunk store abstractions and backends.
//!
//! The store owns the persisted, ordered collection of chunks. The backing
//! representation is swappable behind the [`ChunkStore`] trait so retrieval
//! logic never touches the on-disk format:
//!
//! - [`JsonChunkStore`] - single JSON file, the production backend
//! - [`InMemoryChunkStore`] - no persistence, for tests
//!
//! # Write model
//!
//! Appending loads the whole collection, extends it, and rewrites it in
//! full. Within one process the store serializes that read-modify-write
//! cycle, so `append` followed by `load_all` observes the new chunks.
//! Concurrent *processes* racing on the same file are not protected; the
//! last writer wins. That lost-update hazard is documented rather than
//! fixed here.

mod json_store;

use crate::retrieval::types::ChunkRecord;
use thiserror::Error;

pub use json_store::JsonChunkStore;

/// Chunk store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure reading or writing the collection
    #[error("I/O error: {0}")]
    Io(String),
    /// Persisted collection exists but fails to parse.
    ///
    /// Fatal for both read and write paths: reinitializing to empty here
    /// would silently destroy data, so the caller must intervene.
    #[error("Corrupt chunk store: {0}")]
    Corrupt(String),
    /// Internal invariant failure (poisoned lock)
    #[error("Store internal error: {0}")]
    Internal(String),
}

/// Durable, append-only repository of text chunks.
///
/// Chunks are immutable once stored; the only mutation is appending. Order
/// of insertion is preserved and is the order `load_all` returns.
#[async_trait::async_trait(?Send)]
pub trait ChunkStore {
    /// Loads the full chunk collection in insertion order.
    ///
    /// A store that has never been written is empty, not an error.
    async fn load_all(&self) -> Result<Vec<ChunkRecord>, StoreError>;

    /// Appends records to the collection, preserving their order.
    ///
    /// An empty input is a legal no-op that returns 0 and leaves the store
    /// untouched. Returns the number of records added.
    async fn append(&self, records: Vec<ChunkRecord>) -> Result<usize, StoreError>;

    /// Returns the number of stored chunks.
    async fn count(&self) -> Result<usize, StoreError>;

    /// Removes all stored chunks.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory chunk store without persistence.
///
/// Useful for unit tests and development.
#[derive(Default)]
pub struct InMemoryChunkStore {
    chunks: std::sync::RwLock<Vec<ChunkRecord>>,
}

impl InMemoryChunkStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait(?Send)]
impl ChunkStore for InMemoryChunkStore {
    async fn load_all(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        let chunks = self
            .chunks
            .read()
            .map_err(|e| StoreError::Internal(format!("Lock poisoned: {e}")))?;
        Ok(chunks.clone())
    }

    async fn append(&self, records: Vec<ChunkRecord>) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut chunks = self
            .chunks
            .write()
            .map_err(|e| StoreError::Internal(format!("Lock poisoned: {e}")))?;
        let added = records.len();
        chunks.extend(records);
        Ok(added)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let chunks = self
            .chunks
            .read()
            .map_err(|e| StoreError::Internal(format!("Lock poisoned: {e}")))?;
        Ok(chunks.len())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut chunks = self
            .chunks
            .write()
            .map_err(|e| StoreError::Internal(format!("Lock poisoned: {e}")))?;
        chunks.clear();
        Ok(())
    }
}

// Blanket implementation so a store can be shared between an engine and a
// pipeline through Arc.
#[async_trait::async_trait(?Send)]
impl<T: ChunkStore> ChunkStore for std::sync::Arc<T> {
    async fn load_all(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        (**self).load_all().await
    }

    async fn append(&self, records: Vec<ChunkRecord>) -> Result<usize, StoreError> {
        (**self).append(records).await
    }

    async fn count(&self) -> Result<usize, StoreError> {
        (**self).count().await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        (**self).clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(texts: &[&str]) -> Vec<ChunkRecord> {
        texts.iter().map(|t| ChunkRecord::new(t.to_string())).collect()
    }

    #[tokio::test]
    async fn test_append_and_load_preserve_order() {
        let store = InMemoryChunkStore::new();
        let added = store.append(records(&["a", "b", "c"])).await.unwrap();
        assert_eq!(added, 3);

        let all = store.load_all().await.unwrap();
        let contents: Vec<_> = all.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_append_is_a_noop() {
        let store = InMemoryChunkStore::new();
        store.append(records(&["a"])).await.unwrap();

        let added = store.append(Vec::new()).await.unwrap();
        assert_eq!(added, 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryChunkStore::new();
        store.append(records(&["a", "b"])).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_arc_sharing() {
        let store = std::sync::Arc::new(InMemoryChunkStore::new());
        let shared = store.clone();
        shared.append(records(&["shared"])).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
