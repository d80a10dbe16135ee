//! Production configuration constants.
//!
//! These values define the default chunking and retrieval behaviour and are
//! referenced throughout the codebase and in tests to keep the two in sync.

/// Maximum characters per chunk.
///
/// Upper bound on chunk length, on a best-effort basis: the splitter prefers
/// natural boundaries (paragraphs, sentences, words) and only falls back to
/// character splitting when nothing else fits.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Characters of trailing text duplicated between consecutive chunks.
///
/// Overlap preserves context continuity across a split boundary so a fact
/// straddling two chunks is still retrievable from either.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Maximum number of chunks returned by a search.
pub const DEFAULT_TOP_K: usize = 3;

/// Separator priority for recursive splitting, coarsest first.
///
/// `"। "` is the Devanagari danda, the Hindi sentence terminator; the final
/// empty separator falls back to splitting on individual characters so no
/// input is ever unsplittable.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", "। ", ". ", " ", ""];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_smaller_than_chunk_size() {
        // Using explicit locals to avoid clippy::assertions_on_constants
        let size = DEFAULT_CHUNK_SIZE;
        let overlap = DEFAULT_CHUNK_OVERLAP;
        assert!(overlap < size, "overlap must leave room for new content");
    }

    #[test]
    fn test_separators_end_with_character_fallback() {
        assert_eq!(DEFAULT_SEPARATORS.last(), Some(&""));
    }
}
