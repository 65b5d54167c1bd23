//! StatusCalculator — pure derivation of question status and confidence.

use scholium_core::config::LifecycleConfig;
use scholium_core::models::{Confidence, ConsistencyLevel, Contradiction, Finding, QuestionStatus};

/// Whether the evaluation is the first answer or a refresh; the base
/// confidence of an answered question differs between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationPhase {
    Initial,
    Refresh,
}

/// The complete input of status derivation. Everything here is countable
/// from persisted findings and contradictions, so the derived values can be
/// re-checked at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInputs {
    pub finding_count: usize,
    pub papers_used_count: usize,
    pub contradiction_count: usize,
    pub high_consistency_count: usize,
}

impl StatusInputs {
    /// Count the inputs from an analysis result.
    pub fn from_analysis(
        findings: &[Finding],
        contradictions: &[Contradiction],
        papers_used_count: usize,
    ) -> Self {
        Self {
            finding_count: findings.len(),
            papers_used_count,
            contradiction_count: contradictions.len(),
            high_consistency_count: findings
                .iter()
                .filter(|f| f.consistency == ConsistencyLevel::High)
                .count(),
        }
    }
}

/// Derives status and confidence from the finding/contradiction counts.
/// A pure function of its inputs — no hidden state.
#[derive(Debug, Clone)]
pub struct StatusCalculator {
    config: LifecycleConfig,
}

impl StatusCalculator {
    pub fn new(config: LifecycleConfig) -> Self {
        Self { config }
    }

    /// Derive (status, confidence).
    ///
    /// No findings means unanswered at zero confidence. Thin evidence
    /// (few findings or few papers) caps the question at partial. Answered
    /// questions start from the high-consistency ratio (initial) or a fixed
    /// refresh base. The presence of any contradiction applies the one
    /// confidence penalty in the system.
    pub fn derive(&self, inputs: &StatusInputs, phase: EvaluationPhase) -> (QuestionStatus, Confidence) {
        if inputs.finding_count == 0 {
            return (QuestionStatus::Unanswered, Confidence::zero());
        }

        let (status, base) = if inputs.finding_count < self.config.answered_min_findings
            || inputs.papers_used_count < self.config.answered_min_papers
        {
            (QuestionStatus::Partial, self.config.partial_confidence)
        } else {
            let base = match phase {
                EvaluationPhase::Initial => {
                    let ratio =
                        inputs.high_consistency_count as f64 / inputs.finding_count as f64;
                    ratio.min(self.config.max_initial_confidence)
                }
                EvaluationPhase::Refresh => self.config.refresh_base_confidence,
            };
            (QuestionStatus::Answered, base)
        };

        let confidence = if inputs.contradiction_count > 0 {
            Confidence::new(base) * self.config.contradiction_penalty
        } else {
            Confidence::new(base)
        };

        (status, confidence)
    }

    /// Recompute status/confidence from persisted rows, for auditing stored
    /// values against the derivation.
    pub fn audit(
        &self,
        findings: &[Finding],
        contradictions: &[Contradiction],
        papers_used_count: usize,
        phase: EvaluationPhase,
    ) -> (QuestionStatus, Confidence) {
        let inputs = StatusInputs::from_analysis(findings, contradictions, papers_used_count);
        self.derive(&inputs, phase)
    }
}

impl Default for StatusCalculator {
    fn default() -> Self {
        Self::new(LifecycleConfig::default())
    }
}
