//! FindingAggregator — groups per-paper claims into canonical findings.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use scholium_core::config::AggregationConfig;
use scholium_core::models::{
    ConsistencyLevel, EvidenceSource, ExtractedClaim, Finding, Paper,
};
use scholium_core::traits::LanguageValidator;

use crate::grouping::{GroupingStrategy, PrefixGrouping};

/// Groups extracted claims into findings and attaches evidence sources.
///
/// Consumes pairs in their given order; identical input order yields an
/// identical grouping, which refresh idempotence depends on. `now` is
/// injected rather than sampled so evidence timestamps are the only
/// run-dependent output.
pub struct FindingAggregator {
    config: AggregationConfig,
    strategy: Box<dyn GroupingStrategy>,
}

impl FindingAggregator {
    /// Aggregator with the default prefix grouping strategy.
    pub fn new(config: AggregationConfig) -> Self {
        let strategy = Box::new(PrefixGrouping::new(config.grouping_prefix_len));
        Self { config, strategy }
    }

    /// Aggregator with a custom grouping strategy.
    pub fn with_strategy(config: AggregationConfig, strategy: Box<dyn GroupingStrategy>) -> Self {
        Self { config, strategy }
    }

    /// Group claims into findings for a question.
    ///
    /// Only relevant claims with non-empty finding text participate. A
    /// candidate finding whose description fails the language validator is
    /// dropped, never retried.
    pub fn aggregate(
        &self,
        question_id: &str,
        pairs: &[(Paper, ExtractedClaim)],
        validator: &dyn LanguageValidator,
        now: DateTime<Utc>,
    ) -> Vec<Finding> {
        // First-seen group order; no map iteration may influence the output.
        let mut group_order: Vec<Vec<usize>> = Vec::new();
        let mut key_to_group: HashMap<String, usize> = HashMap::new();

        for (idx, (_, claim)) in pairs.iter().enumerate() {
            if !claim.contributes() {
                continue;
            }
            let text = claim.finding.as_deref().unwrap_or_default();
            let key = self.strategy.key(text);
            match key_to_group.entry(key) {
                Entry::Occupied(entry) => group_order[*entry.get()].push(idx),
                Entry::Vacant(entry) => {
                    entry.insert(group_order.len());
                    group_order.push(vec![idx]);
                }
            }
        }

        let mut findings = Vec::with_capacity(group_order.len());
        let mut dropped = 0usize;

        for members in &group_order {
            let first = &pairs[members[0]].1;
            let description = first
                .finding
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string();

            if !validator.check(&description) {
                dropped += 1;
                warn!(
                    description = %description,
                    "finding rejected by language validator"
                );
                continue;
            }

            let evidence: Vec<EvidenceSource> = members
                .iter()
                .map(|&i| {
                    let (paper, claim) = &pairs[i];
                    EvidenceSource {
                        paper_id: paper.id.clone(),
                        paper_title: paper.title.clone(),
                        excerpt: claim.evidence.clone().unwrap_or_default(),
                        study_type: claim.study_type.or(paper.study_type),
                        sample_size: claim.sample_size,
                        confidence: claim.confidence,
                        date_added: now,
                    }
                })
                .collect();

            let mean_confidence = evidence
                .iter()
                .map(|e| e.confidence.value())
                .sum::<f64>()
                / evidence.len() as f64;

            let finding = Finding {
                id: uuid::Uuid::new_v4().to_string(),
                question_id: question_id.to_string(),
                description,
                consistency: self.derive_consistency(&evidence, mean_confidence),
                has_contradiction: false,
                quality_assessment: format!(
                    "{} paper(s), avg confidence: {:.2}",
                    evidence.len(),
                    mean_confidence
                ),
                user_notes: None,
                notes_last_updated: None,
                evidence,
            };
            findings.push(finding);
        }

        debug!(
            question_id,
            emitted = findings.len(),
            dropped,
            "aggregation complete"
        );
        findings
    }

    /// Consistency is a pure function of the evidence set: high needs both
    /// breadth (papers) and strength (mean confidence); two papers agreeing
    /// rate medium; a lone paper rates low.
    fn derive_consistency(
        &self,
        evidence: &[EvidenceSource],
        mean_confidence: f64,
    ) -> ConsistencyLevel {
        let papers = evidence.len();
        if papers >= self.config.high_consistency_min_papers
            && mean_confidence >= self.config.high_consistency_min_confidence
        {
            ConsistencyLevel::High
        } else if papers >= 2 {
            ConsistencyLevel::Medium
        } else {
            ConsistencyLevel::Low
        }
    }
}

impl Default for FindingAggregator {
    fn default() -> Self {
        Self::new(AggregationConfig::default())
    }
}
