use serde::{Deserialize, Serialize};

use super::defaults;

/// Lifecycle and status derivation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Fixed base confidence for an answered question after a refresh.
    pub refresh_base_confidence: f64,
    /// Ceiling on the consistency-ratio confidence of an initial answer.
    pub max_initial_confidence: f64,
    /// Confidence assigned to partially answered questions.
    pub partial_confidence: f64,
    /// Confidence multiplier applied when any contradiction exists.
    pub contradiction_penalty: f64,
    /// Minimum findings for a question to count as answered.
    pub answered_min_findings: usize,
    /// Minimum contributing papers for a question to count as answered.
    pub answered_min_papers: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            refresh_base_confidence: defaults::DEFAULT_REFRESH_BASE_CONFIDENCE,
            max_initial_confidence: defaults::DEFAULT_MAX_INITIAL_CONFIDENCE,
            partial_confidence: defaults::DEFAULT_PARTIAL_CONFIDENCE,
            contradiction_penalty: defaults::DEFAULT_CONTRADICTION_PENALTY,
            answered_min_findings: defaults::DEFAULT_ANSWERED_MIN_FINDINGS,
            answered_min_papers: defaults::DEFAULT_ANSWERED_MIN_PAPERS,
        }
    }
}
