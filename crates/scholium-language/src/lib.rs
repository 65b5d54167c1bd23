//! Conservative-language enforcement.
//!
//! Generated findings and interpretations must stay tentative and
//! evidence-qualified. This crate rejects text containing absolute or
//! causal terms ("proves", "always", "caused by") via a denylist regex.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use scholium_core::traits::LanguageValidator;

/// Absolute and causal terms that disqualify generated prose.
const DENIED_TERMS: &[&str] = &[
    "proves",
    "proven",
    "proof that",
    "confirms",
    "confirmed",
    "causes",
    "caused by",
    "always",
    "never",
    "definitively",
    "certainly",
    "undoubtedly",
    "guarantees",
    "guaranteed",
    "establishes that",
];

/// Default denylist pattern, compiled once.
static DENYLIST_RE: LazyLock<Regex> = LazyLock::new(|| compile(DENIED_TERMS));

fn compile(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    // The terms are plain words/phrases, so escaping cannot break the pattern.
    Regex::new(&format!(r"(?i)\b({alternation})\b")).expect("denylist pattern must compile")
}

/// Denylist-based implementation of [`LanguageValidator`].
#[derive(Debug, Clone)]
pub struct DenylistValidator {
    pattern: Regex,
}

impl DenylistValidator {
    /// Validator with the standard denylist.
    pub fn new() -> Self {
        Self {
            pattern: DENYLIST_RE.clone(),
        }
    }

    /// Validator with extra denied terms on top of the standard list.
    pub fn with_extra_terms(extra: &[&str]) -> Self {
        let mut terms: Vec<&str> = DENIED_TERMS.to_vec();
        terms.extend_from_slice(extra);
        Self {
            pattern: compile(&terms),
        }
    }

    /// The distinct denied terms present in `text`, lowercased and sorted.
    pub fn violations(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for DenylistValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageValidator for DenylistValidator {
    fn check(&self, text: &str) -> bool {
        !self.pattern.is_match(text)
    }
}
