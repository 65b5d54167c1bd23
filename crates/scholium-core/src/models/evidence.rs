use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::paper::StudyType;

/// One paper's contribution to a finding.
///
/// Immutable once created — a refresh builds new instances rather than
/// editing old ones, so version snapshots stay truthful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub paper_id: String,
    pub paper_title: String,
    /// Supporting excerpt from the paper.
    pub excerpt: String,
    pub study_type: Option<StudyType>,
    pub sample_size: Option<u32>,
    pub confidence: Confidence,
    pub date_added: DateTime<Utc>,
}
