//! Language-model collaborator ports.
//!
//! Transcription, translation, and answer generation are opaque
//! text-in/text-out services provided by an external model, typically a
//! hosted LLM. The pipeline depends only on these traits;
//! tests inject fakes, and a real provider crate can implement all three
//! against one client.

use crate::error::ModelError;
use std::path::Path;

/// Target language for translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Hindi (Devanagari script)
    Hindi,
    /// English
    English,
}

impl Language {
    /// Returns the BCP-47 tag for this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Hindi => write!(f, "Hindi"),
            Language::English => write!(f, "English"),
        }
    }
}

/// Transcribes spoken audio into Hindi text.
#[async_trait::async_trait(?Send)]
pub trait Transcriber {
    /// Returns best-effort transcribed text for the audio file.
    async fn transcribe(&self, audio_path: &Path) -> Result<String, ModelError>;
}

/// Translates text between Hindi and English.
#[async_trait::async_trait(?Send)]
pub trait Translator {
    /// Returns `text` translated into `target`.
    async fn translate(&self, text: &str, target: Language) -> Result<String, ModelError>;
}

/// Generates an answer constrained to supplied context.
#[async_trait::async_trait(?Send)]
pub trait AnswerGenerator {
    /// Answers `query` using only the information in `context`.
    async fn generate_answer(&self, query: &str, context: &str) -> Result<String, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::Hindi.tag(), "hi");
        assert_eq!(Language::English.tag(), "en");
        assert_eq!(Language::Hindi.to_string(), "Hindi");
    }
}
