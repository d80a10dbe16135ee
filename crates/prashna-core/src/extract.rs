//! Document text extraction port.
//!
//! Extraction converts a source document (PDF, Markdown, plain text) into
//! raw text for ingestion. Only the interface lives here; heavyweight
//! formats are external collaborators implementing [`TextExtractor`]. The
//! shipped [`PlainTextExtractor`] covers the plain-read formats.
//!
//! Failures are explicit: a missing file or unsupported format surfaces as
//! an error instead of collapsing to empty text, so callers can distinguish
//! "document had no text" from "extraction never happened".

use crate::error::ExtractError;
use std::path::Path;

/// Extracts the full text content of a source document.
#[async_trait::async_trait(?Send)]
pub trait TextExtractor {
    /// Returns the document's text, or an explicit failure when the file is
    /// missing, the format is unsupported, or extraction fails.
    async fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Extractor for formats that are a plain file read: Markdown and text.
///
/// PDF and other binary formats are not handled here; they belong to an
/// external collaborator implementing [`TextExtractor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Creates a new plain-text extractor.
    pub fn new() -> Self {
        Self
    }

    fn is_supported(extension: &str) -> bool {
        matches!(extension, "md" | "markdown" | "txt")
    }
}

#[async_trait::async_trait(?Send)]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::NotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !Self::is_supported(&extension) {
            return Err(ExtractError::UnsupportedFormat(path.display().to_string()));
        }

        std::fs::read_to_string(path)
            .map_err(|e| ExtractError::Extraction(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_markdown_and_text() {
        let dir = TempDir::new().unwrap();
        let md = dir.path().join("manual.md");
        std::fs::write(&md, "# स्थापना\nपहले बिजली बंद करें").unwrap();

        let extractor = PlainTextExtractor::new();
        let text = extractor.extract(&md).await.unwrap();
        assert!(text.contains("बिजली"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let extractor = PlainTextExtractor::new();
        let result = extractor.extract(Path::new("/nonexistent/manual.md")).await;
        assert!(matches!(result, Err(ExtractError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_format_is_rejected_not_empty() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("manual.pdf");
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();

        let extractor = PlainTextExtractor::new();
        let result = extractor.extract(&pdf).await;
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }
}
