//! Recursive character splitting with separator priorities and overlap.
//!
//! The splitter walks a separator list from coarsest to finest. For each
//! level it splits the text, keeps pieces already under the size limit, and
//! recurses into pieces that are still too large with the remaining (finer)
//! separators. Undersized pieces are then greedily merged back into chunks,
//! with the trailing `chunk_overlap` characters of each chunk carried into
//! the next one.
//!
//! All lengths are measured in characters, not bytes, so Hindi (Devanagari)
//! and English text are budgeted identically.

use super::types::TextChunk;
use super::ChunkingStrategy;
use crate::config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS};
use crate::error::ChunkingError;
use tracing::debug;

/// Recursive character splitter with configurable size, overlap, and
/// separator priorities.
///
/// # Example
///
/// ```
/// use prashna_core::chunking::{ChunkingStrategy, RecursiveCharacterSplitter};
///
/// let splitter = RecursiveCharacterSplitter::new(1000, 200).unwrap();
/// let chunks = splitter.chunk("some document text").unwrap();
/// assert_eq!(chunks.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveCharacterSplitter {
    /// Creates a splitter with the default separator priorities.
    ///
    /// Fails with [`ChunkingError::InvalidConfig`] if `chunk_size` is zero
    /// or `chunk_overlap` does not leave room for new content.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, ChunkingError> {
        Self::with_separators(chunk_size, chunk_overlap, DEFAULT_SEPARATORS)
    }

    /// Creates a splitter with custom separator priorities, coarsest first.
    ///
    /// If the list does not end with `""`, a piece containing none of the
    /// separators is emitted as-is even when it exceeds `chunk_size`.
    pub fn with_separators(
        chunk_size: usize,
        chunk_overlap: usize,
        separators: &[&str],
    ) -> Result<Self, ChunkingError> {
        if chunk_size == 0 {
            return Err(ChunkingError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkingError::InvalidConfig(format!(
                "chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})"
            )));
        }
        if separators.is_empty() {
            return Err(ChunkingError::InvalidConfig(
                "at least one separator is required".to_string(),
            ));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: separators.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Splits `text` using the coarsest applicable separator, recursing into
    /// oversized pieces with the remaining finer separators.
    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        let mut final_chunks = Vec::new();

        // Pick the first separator present in the text; everything after it
        // is available for recursion into oversized pieces.
        let mut separator = separators.last().map(String::as_str).unwrap_or("");
        let mut remaining: &[String] = &[];
        for (i, sep) in separators.iter().enumerate() {
            if sep.is_empty() {
                separator = "";
                break;
            }
            if text.contains(sep.as_str()) {
                separator = sep;
                remaining = &separators[i + 1..];
                break;
            }
        }

        let splits = split_keeping_separator(text, separator);

        // Pieces small enough to merge are batched; anything oversized
        // flushes the batch and is handled on its own.
        let mut good: Vec<String> = Vec::new();
        for piece in splits {
            if char_len(&piece) < self.chunk_size {
                good.push(piece);
            } else {
                if !good.is_empty() {
                    self.merge_splits(&good, &mut final_chunks);
                    good.clear();
                }
                if remaining.is_empty() {
                    // Indivisible at every level: emit oversized.
                    final_chunks.push(piece);
                } else {
                    final_chunks.extend(self.split_recursive(&piece, remaining));
                }
            }
        }
        if !good.is_empty() {
            self.merge_splits(&good, &mut final_chunks);
        }
        final_chunks
    }

    /// Greedily merges undersized pieces into chunks of at most
    /// `chunk_size` characters, keeping a trailing window of at most
    /// `chunk_overlap` characters as the seed of the next chunk.
    fn merge_splits(&self, splits: &[String], out: &mut Vec<String>) {
        let mut current: Vec<&str> = Vec::new();
        let mut total = 0usize;

        for piece in splits {
            let len = char_len(piece);
            if total + len > self.chunk_size && !current.is_empty() {
                if let Some(doc) = join_and_trim(&current) {
                    out.push(doc);
                }
                // Drop leading pieces until the retained tail fits inside
                // the overlap budget and leaves room for the new piece.
                while total > self.chunk_overlap
                    || (total + len > self.chunk_size && total > 0)
                {
                    total -= char_len(current[0]);
                    current.remove(0);
                }
            }
            current.push(piece);
            total += len;
        }
        if let Some(doc) = join_and_trim(&current) {
            out.push(doc);
        }
    }
}

impl ChunkingStrategy for RecursiveCharacterSplitter {
    fn chunk(&self, text: &str) -> Result<Vec<TextChunk>, ChunkingError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let pieces = self.split_recursive(text, &self.separators);
        let chunks: Vec<TextChunk> = pieces
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .enumerate()
            .map(|(index, text)| TextChunk { index, text })
            .collect();

        debug!(
            chunk_count = chunks.len(),
            input_chars = text.chars().count(),
            "split document"
        );
        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "recursive-character"
    }

    fn max_chars(&self) -> usize {
        self.chunk_size
    }
}

impl Default for RecursiveCharacterSplitter {
    fn default() -> Self {
        // Defaults are validated by the config tests; construction cannot
        // fail for the known-good constants.
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Counts characters, not bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Splits `text` on `separator`, keeping the separator attached to the
/// front of the piece that follows it so joins reconstruct the original
/// text exactly. An empty separator splits into individual characters.
fn split_keeping_separator(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(|c| c.to_string()).collect();
    }

    let mut out = Vec::new();
    for (i, part) in text.split(separator).enumerate() {
        if i == 0 {
            if !part.is_empty() {
                out.push(part.to_string());
            }
        } else if part.is_empty() {
            out.push(separator.to_string());
        } else {
            out.push(format!("{separator}{part}"));
        }
    }
    out
}

/// Concatenates pieces and trims surrounding whitespace.
/// Returns `None` when nothing but whitespace remains.
fn join_and_trim(pieces: &[&str]) -> Option<String> {
    let joined: String = pieces.concat();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(size: usize, overlap: usize) -> RecursiveCharacterSplitter {
        RecursiveCharacterSplitter::new(size, overlap).unwrap()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let s = splitter(1000, 200);
        assert!(s.chunk("").unwrap().is_empty());
        assert!(s.chunk("   \n\n  ").unwrap().is_empty());
    }

    #[test]
    fn test_short_input_is_a_single_chunk() {
        let s = splitter(1000, 200);
        let chunks = s.chunk("the quick brown fox").unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "the quick brown fox");
        assert_eq!(chunks[0].index, 0);
    }

    #[test]
    fn test_chunks_respect_size_bound() {
        let text = (0..500)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let s = splitter(100, 20);
        let chunks = s.chunk(&text).unwrap();
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(
                chunk.char_len() <= 100,
                "chunk exceeded size bound: {} chars",
                chunk.char_len()
            );
        }
    }

    #[test]
    fn test_consecutive_chunks_overlap() {
        // Distinct numbered words make shared text easy to spot: the first
        // word of each chunk must also appear near the end of the previous
        // chunk if overlap was carried over.
        let text = (0..200)
            .map(|i| format!("w{i:03}"))
            .collect::<Vec<_>>()
            .join(" ");
        let s = splitter(80, 30);
        let chunks = s.chunk(&text).unwrap();
        assert!(chunks.len() > 2);

        for pair in chunks.windows(2) {
            let first_word = pair[1].text.split_whitespace().next().unwrap();
            assert!(
                pair[0].text.contains(first_word),
                "chunk {:?} does not overlap into {:?}",
                pair[0].text,
                pair[1].text
            );
        }
    }

    #[test]
    fn test_prefers_paragraph_boundaries() {
        let text = format!("{}\n\n{}", "a".repeat(40), "b".repeat(40));
        let s = splitter(50, 10);
        let chunks = s.chunk(&text).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "a".repeat(40));
        assert_eq!(chunks[1].text, "b".repeat(40));
    }

    #[test]
    fn test_character_fallback_splits_giant_token() {
        // No whitespace at all: the "" separator takes over and produces
        // bounded chunks instead of one oversized chunk.
        let text = "x".repeat(2500);
        let s = splitter(1000, 200);
        let chunks = s.chunk(&text).unwrap();
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.char_len() <= 1000);
        }
    }

    #[test]
    fn test_indivisible_token_emitted_oversized_without_fallback() {
        // Custom separators without the "" fallback: a token longer than
        // chunk_size comes out as-is.
        let token = "y".repeat(150);
        let text = format!("short {token} tail");
        let s = RecursiveCharacterSplitter::with_separators(100, 20, &[" "]).unwrap();
        let chunks = s.chunk(&text).unwrap();
        assert!(chunks.iter().any(|c| c.text.contains(&token)));
        assert!(chunks.iter().any(|c| c.char_len() > 100));
    }

    #[test]
    fn test_hindi_text_splits_on_danda() {
        let text = format!("{}। {}।", "क".repeat(60), "ख".repeat(60));
        let s = splitter(70, 10);
        let chunks = s.chunk(&text).unwrap();
        assert!(chunks.len() >= 2);
        // Character budgeting: no chunk blows past the bound even though
        // Devanagari characters are 3 bytes each in UTF-8.
        for chunk in &chunks {
            assert!(chunk.char_len() <= 70);
        }
        assert!(chunks[0].text.contains('क'));
        assert!(chunks.last().unwrap().text.contains('ख'));
    }

    #[test]
    fn test_deterministic() {
        let text = "one two three. four five six.\n\nseven eight nine.";
        let s = splitter(20, 5);
        assert_eq!(s.chunk(text).unwrap(), s.chunk(text).unwrap());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(RecursiveCharacterSplitter::new(0, 0).is_err());
        assert!(RecursiveCharacterSplitter::new(100, 100).is_err());
        assert!(RecursiveCharacterSplitter::new(100, 200).is_err());
        assert!(RecursiveCharacterSplitter::with_separators(100, 10, &[]).is_err());
    }
}
