use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::paper::StudyType;

/// One paper's extracted claim about a question, as returned by the
/// evidence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedClaim {
    /// Whether the paper speaks to the question at all.
    pub relevant: bool,
    /// The claim in conservative language; the grouping key downstream.
    pub finding: Option<String>,
    /// Supporting excerpt from the paper.
    pub evidence: Option<String>,
    pub study_type: Option<StudyType>,
    pub sample_size: Option<u32>,
    /// Limitations the extraction noted.
    pub limitations: Vec<String>,
    /// The extractor's confidence in the claim.
    pub confidence: Confidence,
}

impl ExtractedClaim {
    /// The degraded form used when an extraction call fails.
    /// A failed paper never aborts the batch; it simply contributes nothing.
    pub fn not_relevant() -> Self {
        Self {
            relevant: false,
            finding: None,
            evidence: None,
            study_type: None,
            sample_size: None,
            limitations: Vec::new(),
            confidence: Confidence::zero(),
        }
    }

    /// Whether this claim can contribute evidence to a finding.
    pub fn contributes(&self) -> bool {
        self.relevant && self.finding.as_deref().is_some_and(|f| !f.trim().is_empty())
    }
}

/// Advisory output of the synthesis collaborator.
///
/// The confidence here is the generator's own estimate; the persisted answer
/// confidence always comes from the status calculator. Gaps are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synthesis {
    pub confidence: Confidence,
    pub gaps: Vec<String>,
}

impl Synthesis {
    /// Neutral fallback when the synthesis call fails.
    pub fn neutral() -> Self {
        Self {
            confidence: Confidence::default(),
            gaps: Vec::new(),
        }
    }
}
