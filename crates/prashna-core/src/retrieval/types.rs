//! Core retrieval types: chunk identity, records, and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique chunk identifier.
///
/// IDs are generated from a process-global atomic counter so chunks have a
/// stable identity independent of their position in the store, which keeps
/// future deletion and deduplication possible without index arithmetic.
///
/// The counter must be re-initialized with [`ChunkId::init_counter`] after
/// loading persisted chunks so freshly generated IDs never collide with
/// existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkId(u64);

/// Global counter for generating unique chunk IDs.
static CHUNK_ID_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

impl ChunkId {
    /// Generates a new unique chunk ID.
    ///
    /// Note: `Default` is intentionally not implemented - calling
    /// `default()` twice would yield different values, which violates the
    /// expectation that defaults are stable.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        use std::sync::atomic::Ordering;
        Self(CHUNK_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Advances the ID counter past the given maximum existing ID.
    ///
    /// Call after loading persisted chunks. Only ever moves the counter
    /// forward, so repeated loads are safe.
    pub fn init_counter(max_existing_id: u64) {
        use std::sync::atomic::Ordering;
        let next_id = max_existing_id.saturating_add(1);
        CHUNK_ID_COUNTER.fetch_max(next_id, Ordering::SeqCst);
    }

    /// Creates a ChunkId from a raw u64 value.
    ///
    /// Useful for deserialization or tests. Take care not to mint
    /// duplicates when using this directly.
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value of this ID.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A stored chunk: the atomic retrievable unit.
///
/// Records are immutable once created; the only store mutation is appending
/// new records. `content` is always non-empty and preserves Hindi and
/// English text losslessly.
///
/// Files written by earlier tooling carry only `content`; a missing `id`
/// is replaced with a freshly generated one on load, and retrieval never
/// consults anything but `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Unique chunk identifier
    #[serde(default = "ChunkId::new")]
    pub id: ChunkId,
    /// Chunk text content
    pub content: String,
}

impl ChunkRecord {
    /// Creates a record with a freshly generated ID.
    pub fn new(content: String) -> Self {
        Self {
            id: ChunkId::new(),
            content,
        }
    }
}

/// Error types for retrieval operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Chunk store failure (missing is not an error; corrupt is)
    #[error("Store error: {0}")]
    Store(#[from] crate::storage::StoreError),
    /// Chunking failure during ingestion
    #[error("Chunking error: {0}")]
    Chunking(#[from] crate::error::ChunkingError),
}
