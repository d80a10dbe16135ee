//! # Prashna Core
//!
//! Retrieval core for a bilingual (Hindi/English) question-answering
//! assistant: documents are split into overlapping chunks, persisted in a
//! chunk store, and retrieved by keyword-overlap scoring at question time.
//!
//! Language-model work (transcription, translation, answer generation) and
//! document extraction are external collaborators, represented here as
//! injected trait ports.
//!
//! ## Modules
//!
//! - [`chunking`] - Recursive character splitting with overlap
//! - [`storage`] - Chunk store trait plus JSON-file and in-memory backends
//! - [`retrieval`] - Relevance scoring and the retrieval engine
//! - [`extract`] - Document text extraction port
//! - [`model`] - Language-model collaborator ports (transcribe/translate/answer)
//! - [`pipeline`] - End-to-end ingest and ask flows
//! - [`config`] - Production configuration constants
//! - [`error`] - Error types shared across the library

pub mod chunking;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod retrieval;
pub mod storage;

pub use pipeline::QaPipeline;
pub use retrieval::RetrievalEngine;
pub use storage::{ChunkStore, InMemoryChunkStore, JsonChunkStore};
