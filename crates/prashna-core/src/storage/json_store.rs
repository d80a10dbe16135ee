//! JSON-file chunk store.
//!
//! The production backend: the whole collection lives in one JSON file as
//! an array of `{"id": n, "content": "..."}` objects. Every operation loads
//! the full file; every append rewrites it in full.
//!
//! # Durability
//!
//! Writes go to a temporary file in the same directory followed by an
//! atomic rename, so a reader never observes a partially written
//! collection. A missing file means an empty store and is initialized
//! lazily; a file that exists but fails to parse is
//! [`StoreError::Corrupt`] and is never silently reset.

use super::{ChunkStore, StoreError};
use crate::retrieval::types::{ChunkId, ChunkRecord};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// File-backed chunk store persisting the collection as a JSON array.
///
/// All operations run behind an async mutex, making the store a single
/// logical writer within the process: `append` followed by `load_all`
/// always observes the appended chunks.
///
/// # Example
///
/// ```ignore
/// use prashna_core::storage::{ChunkStore, JsonChunkStore};
///
/// let store = JsonChunkStore::open("knowledge_base.json");
/// store.append(records).await?;
/// ```
pub struct JsonChunkStore {
    path: PathBuf,
    // Serializes the load-modify-store cycle. Process-local only: two
    // processes sharing the file still race, last writer wins.
    lock: Mutex<()>,
}

impl JsonChunkStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched until the first operation; a missing file is
    /// initialized to an empty collection at that point.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection, lazily initializing a missing file.
    ///
    /// Caller must hold the lock.
    fn load_snapshot(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "chunk store missing, initializing empty");
                self.write_snapshot(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let records: Vec<ChunkRecord> = serde_json::from_str(&raw).map_err(|e| {
            StoreError::Corrupt(format!(
                "{} exists but is not a valid chunk collection: {e}",
                self.path.display()
            ))
        })?;

        // Keep freshly generated IDs ahead of everything already on disk.
        if let Some(max_id) = records.iter().map(|r| r.id.as_u64()).max() {
            ChunkId::init_counter(max_id);
        }
        Ok(records)
    }

    /// Rewrites the whole collection via temp file + atomic rename.
    ///
    /// Caller must hold the lock.
    fn write_snapshot(&self, records: &[ChunkRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Internal(format!("Failed to serialize chunks: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| {
            StoreError::Io(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            StoreError::Io(format!(
                "Failed to commit {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait::async_trait(?Send)]
impl ChunkStore for JsonChunkStore {
    async fn load_all(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load_snapshot()
    }

    async fn append(&self, records: Vec<ChunkRecord>) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let _guard = self.lock.lock().await;
        let mut all = self.load_snapshot()?;
        let added = records.len();
        all.extend(records);
        self.write_snapshot(&all)?;

        debug!(
            added,
            total = all.len(),
            path = %self.path.display(),
            "appended chunks"
        );
        Ok(added)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load_snapshot()?.len())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        // Refuse to clear a corrupt store the same way append does.
        self.load_snapshot()?;
        self.write_snapshot(&[])
    }
}
