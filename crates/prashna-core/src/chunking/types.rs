//! Types for text chunking.

/// A chunk of text produced by splitting a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Index of this chunk in the document (0-based)
    pub index: usize,
    /// The text content of this chunk, always non-empty
    pub text: String,
}

impl TextChunk {
    /// Returns the chunk length in characters (not bytes).
    ///
    /// Devanagari text is multi-byte in UTF-8, so byte length would
    /// overstate the size of Hindi chunks.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
