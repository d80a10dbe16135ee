//! End-to-end ingest and ask flows.
//!
//! [`QaPipeline`] composes the retrieval engine with the language-model
//! collaborator ports. The flow mirrors the deployment this core serves:
//! Hindi question in, English query against the store, model answer
//! constrained to retrieved context, Hindi answer out.
//!
//! The pipeline reports "no relevant chunks" as `Ok(None)`, not an error;
//! what message the end user sees is the caller's decision.

use crate::error::PipelineError;
use crate::extract::TextExtractor;
use crate::model::{AnswerGenerator, Language, Transcriber, Translator};
use crate::retrieval::RetrievalEngine;
use crate::storage::ChunkStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Question-answering pipeline over a retrieval engine.
///
/// # Example
///
/// ```ignore
/// use prashna_core::{QaPipeline, RetrievalEngine, InMemoryChunkStore};
///
/// let engine = RetrievalEngine::new(InMemoryChunkStore::new());
/// let pipeline = QaPipeline::new(engine, translator, generator);
/// pipeline.ingest_text(manual_text).await?;
/// match pipeline.ask("इस मैनुअल में इंस्टालेशन कैसे करें?").await? {
///     Some(answer) => println!("{answer}"),
///     None => println!("no matching context"),
/// }
/// ```
pub struct QaPipeline<S: ChunkStore> {
    engine: RetrievalEngine<S>,
    translator: Arc<dyn Translator>,
    generator: Arc<dyn AnswerGenerator>,
}

impl<S: ChunkStore> QaPipeline<S> {
    /// Creates a pipeline from an engine and the model collaborators.
    pub fn new(
        engine: RetrievalEngine<S>,
        translator: Arc<dyn Translator>,
        generator: Arc<dyn AnswerGenerator>,
    ) -> Self {
        Self {
            engine,
            translator,
            generator,
        }
    }

    /// Returns a reference to the underlying retrieval engine.
    pub fn engine(&self) -> &RetrievalEngine<S> {
        &self.engine
    }

    /// Ingests raw document text. Returns the number of chunks added.
    pub async fn ingest_text(&self, document_text: &str) -> Result<usize, PipelineError> {
        Ok(self.engine.ingest(document_text).await?)
    }

    /// Extracts a document's text and ingests it.
    ///
    /// Extraction failures (missing file, unsupported format) surface as
    /// errors; they are never flattened into an empty ingest.
    pub async fn ingest_file(
        &self,
        extractor: &dyn TextExtractor,
        path: &Path,
    ) -> Result<usize, PipelineError> {
        let text = extractor.extract(path).await?;
        let added = self.ingest_text(&text).await?;
        info!(added, path = %path.display(), "ingested document file");
        Ok(added)
    }

    /// Answers a Hindi question from the stored chunks.
    ///
    /// Translates the question to English, retrieves matching chunks, asks
    /// the model for an answer constrained to that context, and translates
    /// the answer back to Hindi. Returns `Ok(None)` when no stored chunk
    /// matches the query.
    pub async fn ask(&self, hindi_query: &str) -> Result<Option<String>, PipelineError> {
        let english_query = self
            .translator
            .translate(hindi_query, Language::English)
            .await?;
        debug!(query = %english_query, "translated question");

        let chunks = self.engine.search(&english_query).await?;
        if chunks.is_empty() {
            info!("no relevant chunks for question");
            return Ok(None);
        }

        let context = chunks.join("\n");
        let english_answer = self
            .generator
            .generate_answer(&english_query, &context)
            .await?;
        let hindi_answer = self
            .translator
            .translate(&english_answer, Language::Hindi)
            .await?;
        Ok(Some(hindi_answer))
    }

    /// Answers a spoken Hindi question: transcribe, then [`ask`](Self::ask).
    pub async fn ask_audio(
        &self,
        transcriber: &dyn Transcriber,
        audio_path: &Path,
    ) -> Result<Option<String>, PipelineError> {
        let hindi_query = transcriber.transcribe(audio_path).await?;
        debug!(query = %hindi_query, "transcribed question");
        self.ask(&hindi_query).await
    }
}
