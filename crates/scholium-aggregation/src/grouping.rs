//! Pluggable grouping key strategies.
//!
//! The default prefix key is a deliberately cheap surrogate for semantic
//! clustering; any deterministic replacement (an embedding-based strategy,
//! say) can be swapped in without touching the aggregator's contract.

use scholium_core::constants::DEFAULT_GROUPING_PREFIX_LEN;

/// Maps a claim's finding text to its grouping key.
///
/// Two claims land on the same finding iff their keys are equal. A strategy
/// must be deterministic: equal input text always yields an equal key.
pub trait GroupingStrategy: Send + Sync {
    fn key(&self, finding_text: &str) -> String;
}

/// Default strategy: lower-case, collapse whitespace runs, take the leading
/// `prefix_len` characters.
#[derive(Debug, Clone)]
pub struct PrefixGrouping {
    prefix_len: usize,
}

impl PrefixGrouping {
    pub fn new(prefix_len: usize) -> Self {
        Self { prefix_len }
    }
}

impl Default for PrefixGrouping {
    fn default() -> Self {
        Self::new(DEFAULT_GROUPING_PREFIX_LEN)
    }
}

impl GroupingStrategy for PrefixGrouping {
    fn key(&self, finding_text: &str) -> String {
        normalize(finding_text)
            .chars()
            .take(self.prefix_len)
            .collect()
    }
}

/// Lower-case and collapse all whitespace runs to single spaces.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_folds_case_and_whitespace() {
        let g = PrefixGrouping::default();
        assert_eq!(
            g.key("ATP  production\nincreased"),
            g.key("atp production increased")
        );
    }

    #[test]
    fn key_truncates_at_prefix_length() {
        let g = PrefixGrouping::new(10);
        assert_eq!(g.key("magnesium supplementation improved sleep"), "magnesium ");
    }

    #[test]
    fn texts_differing_past_the_prefix_share_a_key() {
        let g = PrefixGrouping::new(20);
        let a = g.key("vitamin d reduced fracture risk in older adults");
        let b = g.key("vitamin d reduced fracture incidence overall");
        assert_eq!(a, b);
    }

    #[test]
    fn key_respects_multibyte_boundaries() {
        let g = PrefixGrouping::new(5);
        // char-based truncation, never a byte split inside 'β'.
        assert_eq!(g.key("ββββββββ"), "βββββ");
    }
}
