//! In-memory store and library for lifecycle tests.
//!
//! One mutex guards all four tables, so `replace_answer` is naturally a
//! single transaction: no reader can observe a cleared-but-not-replaced
//! state.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use scholium_core::errors::ScholiumResult;
use scholium_core::models::{
    Contradiction, Finding, Paper, QuestionVersion, ResearchQuestion,
};
use scholium_core::traits::{AnswerStore, PaperLibrary};

#[derive(Default)]
struct Tables {
    questions: BTreeMap<String, ResearchQuestion>,
    findings: BTreeMap<String, Finding>,
    contradictions: BTreeMap<String, Contradiction>,
    versions: Vec<QuestionVersion>,
}

/// In-memory implementation of the four-table answer store.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored version rows, across all questions.
    pub fn version_count(&self) -> usize {
        self.tables.lock().unwrap().versions.len()
    }
}

impl AnswerStore for MemoryStore {
    fn put_question(&self, question: &ResearchQuestion) -> ScholiumResult<()> {
        let mut tables = self.tables.lock().unwrap();
        tables.questions.insert(question.id.clone(), question.clone());
        Ok(())
    }

    fn get_question(&self, id: &str) -> ScholiumResult<Option<ResearchQuestion>> {
        Ok(self.tables.lock().unwrap().questions.get(id).cloned())
    }

    fn delete_question(&self, id: &str) -> ScholiumResult<()> {
        let mut tables = self.tables.lock().unwrap();
        tables.questions.remove(id);
        tables.findings.retain(|_, f| f.question_id != id);
        tables.versions.retain(|v| v.question_id != id);
        Ok(())
    }

    fn list_questions(&self) -> ScholiumResult<Vec<ResearchQuestion>> {
        Ok(self.tables.lock().unwrap().questions.values().cloned().collect())
    }

    fn put_findings(&self, findings: &[Finding]) -> ScholiumResult<()> {
        let mut tables = self.tables.lock().unwrap();
        for finding in findings {
            tables.findings.insert(finding.id.clone(), finding.clone());
        }
        Ok(())
    }

    fn findings_for_question(&self, question_id: &str) -> ScholiumResult<Vec<Finding>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .findings
            .values()
            .filter(|f| f.question_id == question_id)
            .cloned()
            .collect())
    }

    fn delete_findings_for_question(&self, question_id: &str) -> ScholiumResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let removed: Vec<String> = tables
            .findings
            .values()
            .filter(|f| f.question_id == question_id)
            .map(|f| f.id.clone())
            .collect();
        for id in &removed {
            tables.findings.remove(id);
        }
        tables
            .contradictions
            .retain(|_, c| !removed.contains(&c.finding_id));
        Ok(())
    }

    fn put_contradictions(&self, contradictions: &[Contradiction]) -> ScholiumResult<()> {
        let mut tables = self.tables.lock().unwrap();
        for contradiction in contradictions {
            tables
                .contradictions
                .insert(contradiction.id.clone(), contradiction.clone());
        }
        Ok(())
    }

    fn contradictions_for_findings(
        &self,
        finding_ids: &[String],
    ) -> ScholiumResult<Vec<Contradiction>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .contradictions
            .values()
            .filter(|c| finding_ids.contains(&c.finding_id))
            .cloned()
            .collect())
    }

    fn put_version(&self, version: &QuestionVersion) -> ScholiumResult<()> {
        self.tables.lock().unwrap().versions.push(version.clone());
        Ok(())
    }

    fn versions_for_question(&self, question_id: &str) -> ScholiumResult<Vec<QuestionVersion>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .versions
            .iter()
            .filter(|v| v.question_id == question_id)
            .cloned()
            .collect())
    }

    fn replace_answer(
        &self,
        question: &ResearchQuestion,
        findings: &[Finding],
        contradictions: &[Contradiction],
    ) -> ScholiumResult<()> {
        // Single lock scope = the whole transaction.
        let mut tables = self.tables.lock().unwrap();

        let removed: Vec<String> = tables
            .findings
            .values()
            .filter(|f| f.question_id == question.id)
            .map(|f| f.id.clone())
            .collect();
        for id in &removed {
            tables.findings.remove(id);
        }
        tables
            .contradictions
            .retain(|_, c| !removed.contains(&c.finding_id));

        for finding in findings {
            tables.findings.insert(finding.id.clone(), finding.clone());
        }
        for contradiction in contradictions {
            tables
                .contradictions
                .insert(contradiction.id.clone(), contradiction.clone());
        }
        tables.questions.insert(question.id.clone(), question.clone());
        Ok(())
    }
}

/// In-memory paper library.
#[derive(Default)]
pub struct MemoryLibrary {
    papers: Mutex<Vec<Paper>>,
}

impl MemoryLibrary {
    pub fn new(papers: Vec<Paper>) -> Self {
        Self {
            papers: Mutex::new(papers),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a paper after construction (library growth between refreshes).
    pub fn add(&self, paper: Paper) {
        self.papers.lock().unwrap().push(paper);
    }
}

#[async_trait]
impl PaperLibrary for MemoryLibrary {
    async fn list_papers(&self) -> ScholiumResult<Vec<Paper>> {
        Ok(self.papers.lock().unwrap().clone())
    }

    async fn get_papers_by_ids(&self, ids: &[String]) -> ScholiumResult<Vec<Paper>> {
        Ok(self
            .papers
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}
