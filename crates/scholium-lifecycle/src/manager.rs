//! AnswerLifecycleManager — orchestrates answer and refresh.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use scholium_aggregation::FindingAggregator;
use scholium_contradiction::ContradictionDetector;
use scholium_core::config::ScholiumConfig;
use scholium_core::errors::{ScholiumError, ScholiumResult};
use scholium_core::models::{
    AnswerView, Confidence, Finding, Paper, QuestionStatus, QuestionVersion, ResearchQuestion,
    Synthesis,
};
use scholium_core::traits::{
    AnswerStore, EvidenceCollaborator, LanguageValidator, PaperLibrary, SynthesisCollaborator,
};

use crate::collection;
use crate::reconcile;
use crate::selection;
use crate::status::{EvaluationPhase, StatusCalculator, StatusInputs};

/// Owns a question's life: created once by `answer`, changed only by
/// `refresh`. All collaborators are injected; the manager holds no global
/// state and two questions never interact.
pub struct AnswerLifecycleManager {
    store: Arc<dyn AnswerStore>,
    library: Arc<dyn PaperLibrary>,
    evidence: Arc<dyn EvidenceCollaborator>,
    synthesis: Arc<dyn SynthesisCollaborator>,
    validator: Arc<dyn LanguageValidator>,
    aggregator: FindingAggregator,
    detector: ContradictionDetector,
    status: StatusCalculator,
    config: ScholiumConfig,
}

impl AnswerLifecycleManager {
    pub fn new(
        store: Arc<dyn AnswerStore>,
        library: Arc<dyn PaperLibrary>,
        evidence: Arc<dyn EvidenceCollaborator>,
        synthesis: Arc<dyn SynthesisCollaborator>,
        validator: Arc<dyn LanguageValidator>,
        config: ScholiumConfig,
    ) -> Self {
        Self {
            aggregator: FindingAggregator::new(config.aggregation.clone()),
            detector: ContradictionDetector::new(config.contradiction.clone()),
            status: StatusCalculator::new(config.lifecycle.clone()),
            store,
            library,
            evidence,
            synthesis,
            validator,
            config,
        }
    }

    /// Answer a new question against the library.
    ///
    /// Candidates are pre-filtered by keyword match; with zero candidates
    /// the question persists as unanswered without a single collaborator
    /// call. Per-paper extraction failures degrade the finding count and
    /// never fail the question.
    pub async fn answer(&self, question_text: &str) -> ScholiumResult<AnswerView> {
        let now = Utc::now();
        let mut question = ResearchQuestion::shell(question_text, now);

        let papers = self.library.list_papers().await?;
        let candidates = selection::select_candidates(question_text, &papers, &self.config.selection);
        question.paper_count = candidates.len();

        if candidates.is_empty() {
            info!(question_id = %question.id, "no candidate papers; persisting unanswered");
            self.store.replace_answer(&question, &[], &[])?;
            return Ok(AnswerView {
                question,
                findings: Vec::new(),
                contradictions: Vec::new(),
            });
        }

        debug!(
            question_id = %question.id,
            candidates = candidates.len(),
            "collecting evidence"
        );
        let pairs = collection::collect_claims(self.evidence.as_ref(), &candidates, question_text).await;

        let mut findings =
            self.aggregator
                .aggregate(&question.id, &pairs, self.validator.as_ref(), now);
        let paper_index = index_papers(&candidates);
        let contradictions = self.detector.detect(&mut findings, &paper_index);

        let papers_used = papers_used(&findings);
        let inputs = StatusInputs::from_analysis(&findings, &contradictions, papers_used.len());
        let (status, confidence) = self.status.derive(&inputs, EvaluationPhase::Initial);

        let synthesis = self.synthesize(&findings, question_text).await;

        question.status = status;
        question.confidence = confidence;
        question.gaps = synthesis.gaps;
        question.papers_used = papers_used;
        question.last_updated = now;

        self.store.replace_answer(&question, &findings, &contradictions)?;
        info!(
            question_id = %question.id,
            status = ?question.status,
            findings = findings.len(),
            contradictions = contradictions.len(),
            "question answered"
        );

        Ok(AnswerView {
            question,
            findings,
            contradictions,
        })
    }

    /// Re-evaluate a question against the entire library.
    ///
    /// Snapshots the current answer into an immutable version, regenerates
    /// findings and contradictions from scratch, carries user notes forward
    /// by exact description match, and atomically replaces the old rows.
    pub async fn refresh(&self, question_id: &str) -> ScholiumResult<AnswerView> {
        let now = Utc::now();
        let mut question = self
            .store
            .get_question(question_id)?
            .ok_or_else(|| ScholiumError::QuestionNotFound {
                id: question_id.to_string(),
            })?;

        let old_findings = self.store.findings_for_question(question_id)?;
        let old_ids: Vec<String> = old_findings.iter().map(|f| f.id.clone()).collect();
        let old_contradictions = self.store.contradictions_for_findings(&old_ids)?;

        let note_map = reconcile::build_note_map(&old_findings, &question.orphaned_notes);

        let snapshot =
            QuestionVersion::snapshot(&question, &old_findings, &old_contradictions, now);
        self.store.put_version(&snapshot)?;

        // Refresh looks at everything, not just the original keyword matches.
        let papers = self.library.list_papers().await?;
        let pairs =
            collection::collect_claims(self.evidence.as_ref(), &papers, &question.question_text)
                .await;

        let mut findings =
            self.aggregator
                .aggregate(&question.id, &pairs, self.validator.as_ref(), now);
        let orphaned_notes = reconcile::reconcile(&mut findings, note_map, now);

        let paper_index = index_papers(&papers);
        let contradictions = self.detector.detect(&mut findings, &paper_index);

        let papers_used = papers_used(&findings);
        let inputs = StatusInputs::from_analysis(&findings, &contradictions, papers_used.len());
        let (status, confidence) = self.status.derive(&inputs, EvaluationPhase::Refresh);

        let synthesis = self.synthesize(&findings, &question.question_text).await;

        question.status = status;
        question.confidence = confidence;
        question.gaps = synthesis.gaps;
        question.paper_count = papers.len();
        question.papers_used = papers_used;
        question.orphaned_notes = orphaned_notes;
        question.current_version += 1;
        question.last_updated = now;

        self.store.replace_answer(&question, &findings, &contradictions)?;
        info!(
            question_id = %question.id,
            version = question.current_version,
            status = ?question.status,
            findings = findings.len(),
            orphaned_notes = question.orphaned_notes.len(),
            "question refreshed"
        );

        Ok(AnswerView {
            question,
            findings,
            contradictions,
        })
    }

    /// Load a question with its findings and contradictions.
    pub fn get_answer(&self, question_id: &str) -> ScholiumResult<AnswerView> {
        let question = self
            .store
            .get_question(question_id)?
            .ok_or_else(|| ScholiumError::QuestionNotFound {
                id: question_id.to_string(),
            })?;
        let findings = self.store.findings_for_question(question_id)?;
        let finding_ids: Vec<String> = findings.iter().map(|f| f.id.clone()).collect();
        let contradictions = self.store.contradictions_for_findings(&finding_ids)?;
        Ok(AnswerView {
            question,
            findings,
            contradictions,
        })
    }

    /// All questions in the store.
    pub fn list_questions(&self) -> ScholiumResult<Vec<ResearchQuestion>> {
        self.store.list_questions()
    }

    /// Resolve the papers behind a question's current evidence.
    pub async fn papers_for_question(&self, question_id: &str) -> ScholiumResult<Vec<Paper>> {
        let view = self.get_answer(question_id)?;
        self.library
            .get_papers_by_ids(&view.question.papers_used)
            .await
    }

    /// A question's version history, oldest first.
    pub fn history(&self, question_id: &str) -> ScholiumResult<Vec<QuestionVersion>> {
        let mut versions = self.store.versions_for_question(question_id)?;
        versions.sort_by_key(|v| v.version_number);
        Ok(versions)
    }

    /// Recompute status/confidence from the persisted rows. Useful as an
    /// audit that stored values still match the derivation.
    pub fn audit(&self, question_id: &str) -> ScholiumResult<(QuestionStatus, Confidence)> {
        let view = self.get_answer(question_id)?;
        let phase = if view.question.current_version > 1 {
            EvaluationPhase::Refresh
        } else {
            EvaluationPhase::Initial
        };
        Ok(self.status.audit(
            &view.findings,
            &view.contradictions,
            view.question.papers_used.len(),
            phase,
        ))
    }

    /// Synthesis is advisory: its gap list is persisted, its confidence
    /// estimate is logged and discarded, and a failure degrades to the
    /// neutral fallback.
    async fn synthesize(&self, findings: &[Finding], question_text: &str) -> Synthesis {
        match self.synthesis.synthesize(findings, question_text).await {
            Ok(synthesis) => {
                debug!(
                    advisory_confidence = %synthesis.confidence,
                    gaps = synthesis.gaps.len(),
                    "synthesis advisory received"
                );
                synthesis
            }
            Err(error) => {
                warn!(%error, "synthesis failed; using neutral fallback");
                Synthesis::neutral()
            }
        }
    }
}

/// Distinct ids of papers contributing evidence, in finding order.
fn papers_used(findings: &[Finding]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();
    for finding in findings {
        for evidence in &finding.evidence {
            if seen.insert(evidence.paper_id.clone()) {
                ids.push(evidence.paper_id.clone());
            }
        }
    }
    ids
}

fn index_papers(papers: &[Paper]) -> HashMap<String, Paper> {
    papers.iter().map(|p| (p.id.clone(), p.clone())).collect()
}
