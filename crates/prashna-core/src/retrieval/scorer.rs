//! Relevance scoring for stored chunks.
//!
//! The default scorer counts query-keyword overlap by substring
//! containment. It is deliberately naive - no stemming, no IDF, no
//! tokenization of the chunk side - and exists behind a trait so a real
//! ranking function can be injected later.

use std::collections::HashSet;

/// Scores a chunk's relevance to a free-text query.
///
/// A score of zero means "not relevant"; any positive score makes the
/// chunk eligible for retrieval. Scorers must be pure: the same inputs
/// always produce the same score.
pub trait RelevanceScorer: Send + Sync {
    /// Returns the relevance score of `chunk_text` for `query`.
    fn score(&self, query: &str, chunk_text: &str) -> u32;

    /// Returns a human-readable name for this scorer.
    fn name(&self) -> &'static str;
}

/// Keyword-overlap scorer: counts distinct query tokens occurring as
/// substrings of the lowercased chunk text.
///
/// The query is lowercased and split on whitespace into a set of distinct
/// tokens (duplicates collapse, order is irrelevant). The chunk is
/// lowercased but *not* tokenized: each query token matches if it appears
/// anywhere in the chunk text, including inside longer words. Devanagari
/// has no case, so lowercasing is the identity for Hindi text.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlapScorer;

impl KeywordOverlapScorer {
    /// Creates a new keyword-overlap scorer.
    pub fn new() -> Self {
        Self
    }
}

impl RelevanceScorer for KeywordOverlapScorer {
    fn score(&self, query: &str, chunk_text: &str) -> u32 {
        let tokens: HashSet<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if tokens.is_empty() {
            return 0;
        }

        let haystack = chunk_text.to_lowercase();
        tokens
            .iter()
            .filter(|token| haystack.contains(token.as_str()))
            .count() as u32
    }

    fn name(&self) -> &'static str {
        "keyword-overlap"
    }
}
