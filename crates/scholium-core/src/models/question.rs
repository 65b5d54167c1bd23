use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::contradiction::Contradiction;
use super::finding::Finding;

/// Answer state of a research question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Unanswered,
    Partial,
    Answered,
}

/// A user note whose finding no longer exists after a refresh.
/// Preserved verbatim; never discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanedNote {
    /// Description of the finding the note was attached to.
    pub finding_text: String,
    pub note: String,
}

/// A research question and its current answer state.
///
/// Findings and contradictions live in their own tables (see the store
/// trait); this row carries only the derived scalars. Status and confidence
/// are always recomputable from the finding/contradiction set — they are
/// never set independently. Mutated only through answer/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchQuestion {
    /// UUID v4 identifier.
    pub id: String,
    pub question_text: String,
    pub status: QuestionStatus,
    pub confidence: Confidence,
    /// Knowledge gaps surfaced by synthesis; advisory prose.
    pub gaps: Vec<String>,
    /// Papers examined by the last evaluation.
    pub paper_count: usize,
    /// Ids of papers contributing evidence to surviving findings.
    pub papers_used: Vec<String>,
    /// Starts at 1; increases by exactly 1 per refresh.
    pub current_version: u32,
    pub orphaned_notes: Vec<OrphanedNote>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl ResearchQuestion {
    /// A freshly created, not-yet-evaluated question shell.
    pub fn shell(question_text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            question_text: question_text.into(),
            status: QuestionStatus::Unanswered,
            confidence: Confidence::zero(),
            gaps: Vec::new(),
            paper_count: 0,
            papers_used: Vec::new(),
            current_version: 1,
            orphaned_notes: Vec::new(),
            created_at: now,
            last_updated: now,
        }
    }
}

/// Identity equality: a question's identity is its UUID.
impl PartialEq for ResearchQuestion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// The full answer aggregate returned by answer/refresh and lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerView {
    pub question: ResearchQuestion,
    pub findings: Vec<Finding>,
    pub contradictions: Vec<Contradiction>,
}
