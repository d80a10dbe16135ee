//! Text chunking for document ingestion.
//!
//! Documents are split into overlapping, bounded-size chunks before storage
//! so each retrievable unit fits comfortably inside a language-model context
//! window while preserving continuity across split boundaries.
//!
//! The default strategy is [`RecursiveCharacterSplitter`]: it tries a
//! prioritized list of separators from coarsest (paragraph break) to finest
//! (single characters) and greedily merges the resulting pieces back into
//! chunks, carrying a trailing overlap into each new chunk.
//!
//! Chunking is pure: the same input and configuration always produce the
//! same output sequence.

mod recursive;
mod types;

use crate::error::ChunkingError;

pub use recursive::RecursiveCharacterSplitter;
pub use types::TextChunk;

/// Trait for text chunking strategies.
///
/// Implementations define how to split text into coherent chunks suitable
/// for retrieval. Each strategy makes different trade-offs between chunk
/// size, overlap, and boundary quality.
pub trait ChunkingStrategy: Send + Sync {
    /// Splits text into chunks according to this strategy.
    ///
    /// Returned chunks are ordered by their position in the source document
    /// and are always non-empty. Empty or whitespace-only input yields an
    /// empty vector, not an error.
    fn chunk(&self, text: &str) -> Result<Vec<TextChunk>, ChunkingError>;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &'static str;

    /// Returns the target maximum characters per chunk.
    ///
    /// Best effort: a single indivisible token longer than this may be
    /// emitted as-is, oversized.
    fn max_chars(&self) -> usize;
}
