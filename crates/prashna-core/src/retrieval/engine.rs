//! Retrieval engine tying chunking, storage, and scoring together.

use super::scorer::{KeywordOverlapScorer, RelevanceScorer};
use super::types::{ChunkRecord, SearchError};
use crate::chunking::{ChunkingStrategy, RecursiveCharacterSplitter};
use crate::config::DEFAULT_TOP_K;
use crate::storage::ChunkStore;
use tracing::{debug, info};

/// Retrieval engine over a chunk store.
///
/// The engine owns the two core operations of the pipeline:
///
/// - [`ingest`](Self::ingest): split a document into overlapping chunks and
///   append them to the store.
/// - [`search`](Self::search): return the first `top_k` stored chunks
///   relevant to a query, in storage insertion order.
///
/// The chunking strategy and relevance scorer are injected, so both can be
/// replaced without touching the store contract.
///
/// # Example
///
/// ```ignore
/// use prashna_core::retrieval::RetrievalEngine;
/// use prashna_core::storage::InMemoryChunkStore;
///
/// let engine = RetrievalEngine::new(InMemoryChunkStore::new());
/// engine.ingest("the quick brown fox").await?;
/// let hits = engine.search("quick").await?;
/// ```
pub struct RetrievalEngine<S: ChunkStore> {
    store: S,
    splitter: Box<dyn ChunkingStrategy>,
    scorer: Box<dyn RelevanceScorer>,
    top_k: usize,
}

impl<S: ChunkStore> RetrievalEngine<S> {
    /// Creates an engine with default chunking (1000/200 recursive
    /// splitter), default scoring (keyword overlap), and `top_k` = 3.
    pub fn new(store: S) -> Self {
        Self {
            store,
            splitter: Box::new(RecursiveCharacterSplitter::default()),
            scorer: Box::new(KeywordOverlapScorer::new()),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Replaces the chunking strategy.
    pub fn with_splitter(mut self, splitter: Box<dyn ChunkingStrategy>) -> Self {
        self.splitter = splitter;
        self
    }

    /// Replaces the relevance scorer.
    pub fn with_scorer(mut self, scorer: Box<dyn RelevanceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Sets the maximum number of search results.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Splits a document into chunks and appends them to the store.
    ///
    /// Empty or whitespace-only input appends nothing and returns 0.
    /// Returns the number of chunks added.
    pub async fn ingest(&self, document_text: &str) -> Result<usize, SearchError> {
        let chunks = self.splitter.chunk(document_text)?;
        if chunks.is_empty() {
            debug!("document produced no chunks, nothing to ingest");
            return Ok(0);
        }

        let records: Vec<ChunkRecord> = chunks
            .into_iter()
            .map(|c| ChunkRecord::new(c.text))
            .collect();
        let added = self.store.append(records).await?;

        info!(added, "ingested document");
        Ok(added)
    }

    /// Returns the contents of up to `top_k` chunks relevant to `query`.
    ///
    /// A chunk is relevant when its score is at least 1. Results keep the
    /// store's insertion order and are cut off at the first `top_k`
    /// relevant chunks encountered - relevance scores do not reorder them.
    /// An empty query matches nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        if query.split_whitespace().next().is_none() {
            return Ok(Vec::new());
        }

        let records = self.store.load_all().await?;
        let mut hits = Vec::new();
        for record in &records {
            if self.scorer.score(query, &record.content) >= 1 {
                hits.push(record.content.clone());
                if hits.len() == self.top_k {
                    break;
                }
            }
        }

        debug!(
            scanned = records.len(),
            hits = hits.len(),
            scorer = self.scorer.name(),
            "search complete"
        );
        Ok(hits)
    }

    /// Returns the number of stored chunks.
    pub async fn chunk_count(&self) -> Result<usize, SearchError> {
        Ok(self.store.count().await?)
    }
}
