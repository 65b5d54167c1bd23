use serde::{Deserialize, Serialize};

use super::defaults;

/// Contradiction detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContradictionConfig {
    /// Minimum token-set Jaccard similarity for two findings to share a topic.
    pub topic_overlap_threshold: f64,
    /// Mean-publication-year gap (years) flagged as a possible explanation.
    pub publication_year_gap_threshold: i32,
    /// Full-text-availability ratio gap treated as a quality difference.
    pub availability_gap_threshold: f64,
}

impl Default for ContradictionConfig {
    fn default() -> Self {
        Self {
            topic_overlap_threshold: defaults::DEFAULT_TOPIC_OVERLAP_THRESHOLD,
            publication_year_gap_threshold: defaults::DEFAULT_PUBLICATION_YEAR_GAP,
            availability_gap_threshold: defaults::DEFAULT_AVAILABILITY_GAP,
        }
    }
}
