use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::contradiction::Contradiction;
use super::finding::Finding;
use super::question::{QuestionStatus, ResearchQuestion};

/// Immutable snapshot of a question's answer, taken before every refresh.
/// Append-only history; never mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionVersion {
    /// UUID v4 identifier.
    pub id: String,
    pub question_id: String,
    pub version_number: u32,
    pub date_generated: DateTime<Utc>,
    pub findings: Vec<Finding>,
    pub contradictions: Vec<Contradiction>,
    pub paper_count: usize,
    pub confidence: Confidence,
    pub status: QuestionStatus,
    pub papers_used: Vec<String>,
}

impl QuestionVersion {
    /// Snapshot the current state of a question before a refresh replaces it.
    pub fn snapshot(
        question: &ResearchQuestion,
        findings: &[Finding],
        contradictions: &[Contradiction],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            question_id: question.id.clone(),
            version_number: question.current_version,
            date_generated: now,
            findings: findings.to_vec(),
            contradictions: contradictions.to_vec(),
            paper_count: question.paper_count,
            confidence: question.confidence,
            status: question.status,
            papers_used: question.papers_used.clone(),
        }
    }
}
