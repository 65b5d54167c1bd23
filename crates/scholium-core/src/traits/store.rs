use crate::errors::ScholiumResult;
use crate::models::{Contradiction, Finding, QuestionVersion, ResearchQuestion};

/// Persistence collaborator: CRUD over the four logical tables
/// (questions, findings, contradictions, versions) plus the one atomic
/// replace that refresh depends on.
///
/// Implementations own durability and retry policy; this core never retries.
pub trait AnswerStore: Send + Sync {
    // --- Questions ---
    fn put_question(&self, question: &ResearchQuestion) -> ScholiumResult<()>;
    fn get_question(&self, id: &str) -> ScholiumResult<Option<ResearchQuestion>>;
    fn delete_question(&self, id: &str) -> ScholiumResult<()>;
    fn list_questions(&self) -> ScholiumResult<Vec<ResearchQuestion>>;

    // --- Findings ---
    fn put_findings(&self, findings: &[Finding]) -> ScholiumResult<()>;
    fn findings_for_question(&self, question_id: &str) -> ScholiumResult<Vec<Finding>>;
    fn delete_findings_for_question(&self, question_id: &str) -> ScholiumResult<()>;

    // --- Contradictions ---
    fn put_contradictions(&self, contradictions: &[Contradiction]) -> ScholiumResult<()>;
    fn contradictions_for_findings(
        &self,
        finding_ids: &[String],
    ) -> ScholiumResult<Vec<Contradiction>>;

    // --- Versions ---
    fn put_version(&self, version: &QuestionVersion) -> ScholiumResult<()>;
    fn versions_for_question(&self, question_id: &str) -> ScholiumResult<Vec<QuestionVersion>>;

    // --- Atomic replace ---
    /// Replace a question's answer in one transaction: delete its old
    /// findings and their contradictions, insert the new rows, and write the
    /// question row. No reader may ever observe a cleared-but-not-replaced
    /// state.
    fn replace_answer(
        &self,
        question: &ResearchQuestion,
        findings: &[Finding],
        contradictions: &[Contradiction],
    ) -> ScholiumResult<()>;
}
