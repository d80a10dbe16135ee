//! Error types for prashna-core.
//!
//! Storage and search errors live with their modules ([`crate::storage`] and
//! [`crate::retrieval`]); this module holds the errors shared across the
//! chunking, extraction, model, and pipeline layers.

use thiserror::Error;

/// Errors that can occur during text chunking.
#[derive(Debug, Clone, Error)]
pub enum ChunkingError {
    /// Invalid chunking configuration
    #[error("Invalid chunking config: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur while extracting text from a source document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Referenced input file does not exist
    #[error("File not found: {0}")]
    NotFound(String),
    /// Document type not recognized by any extractor
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
    /// Extraction itself failed (I/O, malformed document)
    #[error("Extraction failed: {0}")]
    Extraction(String),
}

/// Errors from language-model collaborators (transcription, translation,
/// answer generation).
///
/// Collaborators are opaque text-in/text-out services; their failures are
/// carried as strings rather than modeled structurally.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Audio transcription failed
    #[error("Transcription failed: {0}")]
    Transcription(String),
    /// Translation failed
    #[error("Translation failed: {0}")]
    Translation(String),
    /// Answer generation failed
    #[error("Answer generation failed: {0}")]
    Generation(String),
}

/// Errors from the end-to-end ingest/ask pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Document extraction failed
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// A language-model collaborator failed
    #[error(transparent)]
    Model(#[from] ModelError),
    /// Retrieval engine failure (chunking or storage)
    #[error(transparent)]
    Search(#[from] crate::retrieval::SearchError),
}
