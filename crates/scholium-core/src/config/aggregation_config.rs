use serde::{Deserialize, Serialize};

use super::defaults;

/// Finding aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Leading characters of the normalized finding text used as the grouping key.
    pub grouping_prefix_len: usize,
    /// Supporting papers required for high consistency.
    pub high_consistency_min_papers: usize,
    /// Mean evidence confidence required for high consistency.
    pub high_consistency_min_confidence: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            grouping_prefix_len: defaults::DEFAULT_GROUPING_PREFIX_LEN,
            high_consistency_min_papers: defaults::DEFAULT_HIGH_CONSISTENCY_MIN_PAPERS,
            high_consistency_min_confidence: defaults::DEFAULT_HIGH_CONSISTENCY_MIN_CONFIDENCE,
        }
    }
}
