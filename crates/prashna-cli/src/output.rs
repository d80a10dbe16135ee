//! Output formatting for search results.
//!
//! Supports human-readable terminal output and JSON for scripting.

use serde::Serialize;

/// Maximum characters to show per chunk in human-readable output
const SNIPPET_MAX_CHARS: usize = 200;

/// JSON output structure for search results
#[derive(Serialize)]
pub struct JsonOutput {
    pub query: String,
    pub results: Vec<JsonResult>,
}

/// Single chunk in JSON output
#[derive(Serialize)]
pub struct JsonResult {
    /// 1-based position in storage insertion order
    pub rank: usize,
    /// Full chunk content
    pub content: String,
}

/// Formats search results as JSON.
pub fn format_json(query: &str, results: &[String]) -> String {
    let output = JsonOutput {
        query: query.to_string(),
        results: results
            .iter()
            .enumerate()
            .map(|(i, content)| JsonResult {
                rank: i + 1,
                content: content.clone(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats search results for human-readable terminal output.
pub fn format_human(query: &str, results: &[String]) -> String {
    if results.is_empty() {
        return format!("No results found for \"{query}\"");
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Found {} chunk{} for \"{}\":\n\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    ));

    for (i, content) in results.iter().enumerate() {
        output.push_str(&format!("{}. {}\n\n", i + 1, truncate_chars(content)));
    }

    output.trim_end().to_string()
}

/// Truncates to a character budget, adding an ellipsis if needed.
///
/// Character-based rather than byte-based so Devanagari text is never cut
/// mid-codepoint.
fn truncate_chars(text: &str) -> String {
    let text = text.trim();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= SNIPPET_MAX_CHARS {
        text.to_string()
    } else {
        let truncated: String = chars[..SNIPPET_MAX_CHARS].iter().collect();
        match truncated.rfind(' ') {
            Some(last_space) => format!("{}...", &truncated[..last_space]),
            None => format!("{truncated}..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_human_empty() {
        let output = format_human("test query", &[]);
        assert!(output.contains("No results found"));
    }

    #[test]
    fn test_format_human_lists_results() {
        let results = vec!["first chunk".to_string(), "second chunk".to_string()];
        let output = format_human("chunk", &results);
        assert!(output.contains("2 chunks"));
        assert!(output.contains("1. first chunk"));
        assert!(output.contains("2. second chunk"));
    }

    #[test]
    fn test_format_json() {
        let results = vec!["सामग्री".to_string()];
        let output = format_json("प्रश्न", &results);
        assert!(output.contains("\"query\": \"प्रश्न\""));
        assert!(output.contains("\"rank\": 1"));
        assert!(output.contains("\"content\": \"सामग्री\""));
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "word ".repeat(100);
        let truncated = truncate_chars(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= SNIPPET_MAX_CHARS + 3);
    }

    #[test]
    fn test_truncate_devanagari_safely() {
        let long = "हिंदी ".repeat(100);
        let truncated = truncate_chars(&long);
        assert!(truncated.ends_with("..."));
    }
}
