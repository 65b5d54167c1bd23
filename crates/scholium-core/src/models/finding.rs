use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::evidence::EvidenceSource;
use super::paper::StudyType;

/// How consistently the evidence supports a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyLevel {
    High,
    Medium,
    Low,
}

/// A conservative claim about a question, backed by one or more papers.
///
/// `description` is the grouping key: all evidence on one finding describes
/// the same claim. The supporting-paper list, study types, and sample sizes
/// are views over `evidence`, never authored directly. `user_notes` is the
/// only human-writable field and the only value a refresh must carry forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// UUID v4 identifier.
    pub id: String,
    pub question_id: String,
    pub description: String,
    pub evidence: Vec<EvidenceSource>,
    pub consistency: ConsistencyLevel,
    pub has_contradiction: bool,
    /// `"<n> paper(s), avg confidence: <mean 2dp>"`.
    pub quality_assessment: String,
    pub user_notes: Option<String>,
    pub notes_last_updated: Option<DateTime<Utc>>,
}

impl Finding {
    /// Distinct ids of the papers supporting this finding, in evidence order.
    pub fn supporting_paper_ids(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.evidence
            .iter()
            .filter(|e| seen.insert(e.paper_id.clone()))
            .map(|e| e.paper_id.clone())
            .collect()
    }

    /// Number of distinct supporting papers.
    pub fn supporting_paper_count(&self) -> usize {
        self.evidence
            .iter()
            .map(|e| e.paper_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// The set of study designs represented in the evidence.
    pub fn study_types(&self) -> BTreeSet<StudyType> {
        self.evidence.iter().filter_map(|e| e.study_type).collect()
    }

    /// Whether any supporting evidence comes from a clinical trial.
    pub fn has_clinical_trial(&self) -> bool {
        self.evidence
            .iter()
            .any(|e| e.study_type.is_some_and(|s| s.is_clinical_trial()))
    }

    /// Reported sample sizes, in evidence order.
    pub fn sample_sizes(&self) -> Vec<u32> {
        self.evidence.iter().filter_map(|e| e.sample_size).collect()
    }
}

/// Identity equality: a finding's identity is its UUID, not its content.
impl PartialEq for Finding {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;

    fn evidence(paper_id: &str, study_type: Option<StudyType>) -> EvidenceSource {
        EvidenceSource {
            paper_id: paper_id.to_string(),
            paper_title: format!("Paper {paper_id}"),
            excerpt: "excerpt".to_string(),
            study_type,
            sample_size: None,
            confidence: Confidence::new(0.8),
            date_added: chrono::Utc::now(),
        }
    }

    #[test]
    fn supporting_papers_are_deduplicated_in_order() {
        let f = Finding {
            id: "f1".into(),
            question_id: "q1".into(),
            description: "test".into(),
            evidence: vec![evidence("p2", None), evidence("p1", None), evidence("p2", None)],
            consistency: ConsistencyLevel::Low,
            has_contradiction: false,
            quality_assessment: String::new(),
            user_notes: None,
            notes_last_updated: None,
        };
        assert_eq!(f.supporting_paper_ids(), vec!["p2", "p1"]);
        assert_eq!(f.supporting_paper_count(), 2);
    }

    #[test]
    fn clinical_trial_detection_scans_all_evidence() {
        let f = Finding {
            id: "f1".into(),
            question_id: "q1".into(),
            description: "test".into(),
            evidence: vec![
                evidence("p1", Some(StudyType::Observational)),
                evidence("p2", Some(StudyType::ClinicalTrial)),
            ],
            consistency: ConsistencyLevel::Low,
            has_contradiction: false,
            quality_assessment: String::new(),
            user_notes: None,
            notes_last_updated: None,
        };
        assert!(f.has_clinical_trial());
    }
}
