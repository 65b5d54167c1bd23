//! Topic gate: token-set overlap between finding descriptions.

use std::collections::BTreeSet;

use scholium_core::constants::MIN_TOKEN_LEN;

/// Case-folded word tokens longer than three characters.
pub fn tokens(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity between two token sets. Empty-vs-anything is 0.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

/// Tokens common to both sets, in sorted order.
pub fn shared_tokens(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.intersection(b).cloned().collect()
}
