//! Keyword-overlap retrieval over the chunk store.
//!
//! This module implements the query side of the pipeline:
//!
//! - `types`: Core types (ChunkId, ChunkRecord, SearchError)
//! - `scorer`: Pluggable relevance scoring, keyword overlap by default
//! - `engine`: RetrievalEngine tying chunking, storage, and scoring together
//!
//! # Ranking policy
//!
//! Relevant chunks (score >= 1) are returned in **storage insertion order**
//! and truncated to the first `top_k` encountered - not the top-k by score.
//! A chunk matching one keyword near the front of the store therefore beats
//! a chunk matching five keywords stored later. This is the v1 contract; the
//! [`RelevanceScorer`] seam exists so a real ranking (TF-IDF, vectors) can
//! replace it without touching the store contract.

mod engine;
mod scorer;
pub mod types;

pub use engine::RetrievalEngine;
pub use scorer::{KeywordOverlapScorer, RelevanceScorer};
pub use types::{ChunkId, ChunkRecord, SearchError};
