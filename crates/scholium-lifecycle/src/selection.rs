//! Candidate paper selection by stop-word-filtered keyword match.

use std::collections::BTreeSet;

use scholium_core::config::SelectionConfig;
use scholium_core::constants::STOP_WORDS;
use scholium_core::models::Paper;

/// Meaningful question tokens: case-folded words of at least the configured
/// length, with stop words removed.
pub fn question_tokens(question: &str, config: &SelectionConfig) -> BTreeSet<String> {
    question
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= config.min_token_len)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Papers whose title or abstract shares at least one token with the
/// question. Library order is preserved so downstream grouping and
/// tie-breaks stay reproducible.
pub fn select_candidates(
    question: &str,
    papers: &[Paper],
    config: &SelectionConfig,
) -> Vec<Paper> {
    let keywords = question_tokens(question, config);
    if keywords.is_empty() {
        return Vec::new();
    }

    papers
        .iter()
        .filter(|paper| {
            let text = format!("{} {}", paper.title, paper.abstract_text).to_lowercase();
            let words: BTreeSet<&str> = text
                .split(|c: char| !c.is_alphanumeric())
                .filter(|t| !t.is_empty())
                .collect();
            keywords.iter().any(|k| words.contains(k.as_str()))
        })
        .cloned()
        .collect()
}
