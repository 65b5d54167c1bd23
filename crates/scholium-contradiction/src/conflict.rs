//! Conflict gate: opposite-direction result terms.

use regex::Regex;
use std::sync::LazyLock;

/// Fixed table of opposite-direction result terms.
pub const OPPOSITE_TERMS: &[(&str, &str)] = &[
    ("increased", "decreased"),
    ("higher", "lower"),
    ("elevated", "reduced"),
    ("improved", "worsened"),
    ("positive", "negative"),
    ("present", "absent"),
    ("found", "not found"),
];

static TERM_PATTERNS: LazyLock<Vec<(Regex, Regex)>> = LazyLock::new(|| {
    OPPOSITE_TERMS
        .iter()
        .map(|(a, b)| (word_pattern(a), word_pattern(b)))
        .collect()
});

fn word_pattern(term: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
        .expect("opposite-term pattern must compile")
}

/// Whether `text` contains `pattern` as a standalone term.
///
/// The bare "found" only counts when not negated, so "not found" on one side
/// never conflicts with itself on the other.
fn has_term(text: &str, term: &str, pattern: &Regex) -> bool {
    if term == "found" {
        return pattern
            .find_iter(text)
            .any(|m| !text[..m.start()].trim_end().to_lowercase().ends_with("not"));
    }
    pattern.is_match(text)
}

/// Scan two result texts for opposite-direction terms.
///
/// Returns the first opposing pair hit, as (term in `a`, term in `b`), in
/// table order then a→b before b→a — a fixed order so detection is
/// deterministic.
pub fn opposing(a: &str, b: &str) -> Option<(&'static str, &'static str)> {
    for (&(term_a, term_b), (pat_a, pat_b)) in OPPOSITE_TERMS.iter().zip(TERM_PATTERNS.iter()) {
        if has_term(a, term_a, pat_a) && has_term(b, term_b, pat_b) {
            return Some((term_a, term_b));
        }
        if has_term(a, term_b, pat_b) && has_term(b, term_a, pat_a) {
            return Some((term_b, term_a));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_direct_opposition() {
        assert_eq!(
            opposing("ATP production increased 20%", "ATP production decreased 15%"),
            Some(("increased", "decreased"))
        );
    }

    #[test]
    fn detects_opposition_in_either_direction() {
        assert_eq!(
            opposing("cortisol was lower at follow-up", "cortisol was higher at follow-up"),
            Some(("lower", "higher"))
        );
    }

    #[test]
    fn same_direction_is_not_a_conflict() {
        assert!(opposing("risk increased in both arms", "risk increased overall").is_none());
    }

    #[test]
    fn negated_found_does_not_match_the_positive_term() {
        // Both sides report absence; no conflict.
        assert!(opposing("the biomarker was not found", "the biomarker was not found").is_none());
        // One side found it, the other did not.
        assert_eq!(
            opposing("the biomarker was found in serum", "the biomarker was not found"),
            Some(("found", "not found"))
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            opposing("Levels were ELEVATED", "levels were reduced"),
            Some(("elevated", "reduced"))
        );
    }
}
