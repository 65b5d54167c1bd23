//! ContradictionDetector — pairwise comparison of a question's findings.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use scholium_core::config::ContradictionConfig;
use scholium_core::constants::{MAJOR_BOTH_SIDES_MIN_PAPERS, MAJOR_TRIAL_TOTAL_PAPERS};
use scholium_core::models::{
    Contradiction, ContradictionStatus, ContradictionView, Finding, Paper, Severity,
};

use crate::conflict;
use crate::discrepancy;
use crate::interpretation;
use crate::overlap;

/// Detects disagreements between findings that share a topic but report
/// opposite-direction results.
pub struct ContradictionDetector {
    config: ContradictionConfig,
}

impl ContradictionDetector {
    pub fn new(config: ContradictionConfig) -> Self {
        Self { config }
    }

    /// Compare every finding pair. Emits zero or more contradictions and
    /// flips `has_contradiction` on every referenced finding.
    ///
    /// `papers` resolves paper ids for the discrepancy analysis; unresolved
    /// ids simply contribute nothing to it.
    pub fn detect(
        &self,
        findings: &mut [Finding],
        papers: &HashMap<String, Paper>,
    ) -> Vec<Contradiction> {
        let mut contradictions = Vec::new();

        for i in 0..findings.len() {
            for j in (i + 1)..findings.len() {
                if let Some(c) = self.compare(&findings[i], &findings[j], papers) {
                    contradictions.push(c);
                    findings[i].has_contradiction = true;
                    findings[j].has_contradiction = true;
                }
            }
        }

        debug!(
            pairs = findings.len() * findings.len().saturating_sub(1) / 2,
            found = contradictions.len(),
            "contradiction detection complete"
        );
        contradictions
    }

    fn compare(
        &self,
        a: &Finding,
        b: &Finding,
        papers: &HashMap<String, Paper>,
    ) -> Option<Contradiction> {
        // Topic gate: the findings must talk about the same thing.
        let a_tokens = overlap::tokens(&a.description);
        let b_tokens = overlap::tokens(&b.description);
        let similarity = overlap::jaccard(&a_tokens, &b_tokens);
        if similarity < self.config.topic_overlap_threshold {
            return None;
        }

        // Conflict gate: same topic alone is agreement, not contradiction.
        conflict::opposing(&a.description, &b.description)?;

        let (majority, minority) = assign_sides(a, b);
        let severity = derive_severity(majority, minority);
        let report = discrepancy::analyze(majority, minority, papers, &self.config);

        let majority_view = view_of(majority);
        let minority_view = view_of(minority);
        let interpretation = interpretation::conservative_interpretation(
            &majority_view,
            &minority_view,
            !report.methodological_differences.is_empty(),
        );

        Some(Contradiction {
            id: uuid::Uuid::new_v4().to_string(),
            finding_id: majority.id.clone(),
            topic: overlap::shared_tokens(&a_tokens, &b_tokens).join(" "),
            majority_view,
            minority_view,
            severity,
            methodological_differences: report.methodological_differences,
            possible_explanations: report.possible_explanations,
            conservative_interpretation: interpretation,
            status: ContradictionStatus::Unresolved,
        })
    }
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new(ContradictionConfig::default())
    }
}

/// Majority is the side with more supporting papers. Equal counts resolve
/// by lexicographically smaller description — a total order, so side
/// assignment never depends on iteration order.
fn assign_sides<'a>(a: &'a Finding, b: &'a Finding) -> (&'a Finding, &'a Finding) {
    match a
        .supporting_paper_count()
        .cmp(&b.supporting_paper_count())
    {
        Ordering::Greater => (a, b),
        Ordering::Less => (b, a),
        Ordering::Equal => {
            if a.description <= b.description {
                (a, b)
            } else {
                (b, a)
            }
        }
    }
}

/// Major when both sides are multi-paper, or when a clinical trial is
/// involved and the combined evidence is broad enough.
fn derive_severity(majority: &Finding, minority: &Finding) -> Severity {
    let maj = majority.supporting_paper_count();
    let min = minority.supporting_paper_count();
    let both_replicated =
        maj >= MAJOR_BOTH_SIDES_MIN_PAPERS && min >= MAJOR_BOTH_SIDES_MIN_PAPERS;
    let trial_involved = (majority.has_clinical_trial() || minority.has_clinical_trial())
        && maj + min >= MAJOR_TRIAL_TOTAL_PAPERS;
    if both_replicated || trial_involved {
        Severity::Major
    } else {
        Severity::Minor
    }
}

fn view_of(finding: &Finding) -> ContradictionView {
    ContradictionView {
        description: finding.description.clone(),
        paper_ids: finding.supporting_paper_ids(),
        evidence: finding
            .evidence
            .iter()
            .map(|e| e.excerpt.as_str())
            .find(|e| !e.is_empty())
            .unwrap_or_default()
            .to_string(),
        paper_count: finding.supporting_paper_count(),
    }
}
