//! End-to-end lifecycle tests: answer, refresh, versioning, notes.

use std::sync::Arc;

use scholium_core::config::ScholiumConfig;
use scholium_core::errors::ScholiumError;
use scholium_core::models::{Confidence, QuestionStatus, Synthesis};
use scholium_core::traits::AnswerStore;
use scholium_language::DenylistValidator;
use scholium_lifecycle::AnswerLifecycleManager;
use test_fixtures::{make_claim, make_paper, MemoryLibrary, MemoryStore, StubEvidence, StubSynthesis};

fn manager(
    store: &Arc<MemoryStore>,
    library: &Arc<MemoryLibrary>,
    evidence: &Arc<StubEvidence>,
    synthesis: &Arc<StubSynthesis>,
) -> AnswerLifecycleManager {
    AnswerLifecycleManager::new(
        store.clone(),
        library.clone(),
        evidence.clone(),
        synthesis.clone(),
        Arc::new(DenylistValidator::new()),
        ScholiumConfig::default(),
    )
}

fn setup() -> (
    Arc<MemoryStore>,
    Arc<MemoryLibrary>,
    Arc<StubEvidence>,
    Arc<StubSynthesis>,
) {
    (
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryLibrary::empty()),
        Arc::new(StubEvidence::new()),
        Arc::new(StubSynthesis::default()),
    )
}

// ─── Answer ───

#[tokio::test]
async fn empty_library_is_unanswered_with_no_collaborator_calls() {
    let (store, library, evidence, synthesis) = setup();
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("What is the role of magnesium in sleep?").await.unwrap();

    assert_eq!(view.question.status, QuestionStatus::Unanswered);
    assert_eq!(view.question.confidence.value(), 0.0);
    assert!(view.findings.is_empty());
    assert_eq!(evidence.calls(), 0);
    assert_eq!(synthesis.calls(), 0);

    let stored = store.get_question(&view.question.id).unwrap().unwrap();
    assert_eq!(stored.status, QuestionStatus::Unanswered);
    assert_eq!(stored.current_version, 1);
}

#[tokio::test]
async fn papers_without_keyword_overlap_are_never_sent_for_extraction() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Iron deficiency anemia", "Ferritin thresholds"));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();

    assert_eq!(view.question.status, QuestionStatus::Unanswered);
    assert_eq!(view.question.paper_count, 0);
    assert_eq!(evidence.calls(), 0);
}

#[tokio::test]
async fn one_finding_from_three_papers_is_partial() {
    let (store, library, evidence, synthesis) = setup();
    for id in ["p1", "p2", "p3"] {
        library.add(make_paper(id, &format!("Sleep and magnesium study {id}"), ""));
        evidence.script(id, make_claim("Magnesium supplementation improved sleep quality", 0.8));
    }
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep quality?").await.unwrap();

    assert_eq!(evidence.calls(), 3);
    assert_eq!(view.findings.len(), 1);
    assert_eq!(view.findings[0].evidence.len(), 3);
    assert_eq!(view.question.status, QuestionStatus::Partial);
    assert_eq!(view.question.confidence.value(), 0.5);
    assert_eq!(view.question.papers_used, vec!["p1", "p2", "p3"]);
    assert_eq!(view.question.paper_count, 3);
}

#[tokio::test]
async fn extraction_failure_degrades_the_paper_and_never_the_question() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Sleep magnesium trial one", ""));
    library.add(make_paper("p2", "Sleep magnesium trial two", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    evidence.script("p2", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    evidence.fail_for("p2");
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();

    assert_eq!(view.findings.len(), 1);
    assert_eq!(view.findings[0].evidence.len(), 1);
    assert_eq!(view.question.papers_used, vec!["p1"]);
    assert_eq!(view.question.status, QuestionStatus::Partial);
}

#[tokio::test]
async fn answered_confidence_is_the_high_consistency_ratio() {
    let (store, library, evidence, synthesis) = setup();
    for id in ["p1", "p2", "p3"] {
        library.add(make_paper(id, &format!("Sleep study {id}"), ""));
        evidence.script(id, make_claim("Magnesium supplementation improved sleep quality scores", 0.8));
    }
    library.add(make_paper("p4", "Sleep study p4", ""));
    evidence.script("p4", make_claim("Zinc intake showed no association with sleep latency", 0.6));
    library.add(make_paper("p5", "Sleep study p5", ""));
    evidence.script("p5", make_claim("Daytime alertness correlated with earlier bedtimes", 0.6));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("How can sleep quality improve?").await.unwrap();

    assert_eq!(view.findings.len(), 3);
    assert_eq!(view.question.status, QuestionStatus::Answered);
    // One high-consistency finding out of three.
    assert!((view.question.confidence.value() - 1.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn synthesis_gaps_are_persisted_but_its_confidence_is_advisory() {
    let (store, library, evidence, _) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let synthesis = Arc::new(StubSynthesis::new(Synthesis {
        confidence: Confidence::new(0.99),
        gaps: vec!["No trials in adults under thirty".to_string()],
    }));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();

    assert_eq!(view.question.gaps, vec!["No trials in adults under thirty"]);
    // The calculator's number wins, not the generator's.
    assert_eq!(view.question.confidence.value(), 0.5);
    assert_eq!(synthesis.calls(), 1);
}

#[tokio::test]
async fn synthesis_failure_falls_back_to_no_gaps() {
    let (store, library, evidence, _) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let synthesis = Arc::new(StubSynthesis::failing());
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();

    assert_eq!(view.question.status, QuestionStatus::Partial);
    assert!(view.question.gaps.is_empty());
}

// ─── Refresh ───

#[tokio::test]
async fn refresh_of_an_unknown_question_is_not_found() {
    let (store, library, evidence, synthesis) = setup();
    let m = manager(&store, &library, &evidence, &synthesis);

    let err = m.refresh("missing-id").await.unwrap_err();
    assert!(matches!(err, ScholiumError::QuestionNotFound { id } if id == "missing-id"));
    assert_eq!(store.version_count(), 0);
}

#[tokio::test]
async fn each_refresh_appends_one_version_and_bumps_by_one() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    let id = view.question.id.clone();

    for _ in 0..3 {
        m.refresh(&id).await.unwrap();
    }

    let question = store.get_question(&id).unwrap().unwrap();
    assert_eq!(question.current_version, 4);
    assert_eq!(store.version_count(), 3);

    let history = m.history(&id).unwrap();
    let numbers: Vec<u32> = history.iter().map(|v| v.version_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn refresh_snapshots_the_prior_answer_verbatim() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let first = m.answer("Does magnesium improve sleep?").await.unwrap();
    m.refresh(&first.question.id).await.unwrap();

    let history = m.history(&first.question.id).unwrap();
    assert_eq!(history.len(), 1);
    let snapshot = &history[0];
    assert_eq!(snapshot.version_number, 1);
    assert_eq!(snapshot.status, first.question.status);
    assert_eq!(snapshot.confidence, first.question.confidence);
    assert_eq!(snapshot.findings.len(), first.findings.len());
    assert_eq!(snapshot.papers_used, first.question.papers_used);
}

#[tokio::test]
async fn refresh_scans_the_whole_library_not_the_keyword_matches() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    assert_eq!(evidence.calls(), 1);

    // A paper that no keyword would select still joins the refresh.
    library.add(make_paper("p2", "Unrelated proteomics survey", ""));
    evidence.script("p2", make_claim("Magnesium supplementation improved sleep quality", 0.9));

    let refreshed = m.refresh(&view.question.id).await.unwrap();

    assert_eq!(evidence.calls(), 3);
    assert_eq!(refreshed.question.paper_count, 2);
    assert_eq!(refreshed.findings[0].evidence.len(), 2);
}

// ─── Notes ───

#[tokio::test]
async fn a_note_survives_refresh_when_its_finding_regenerates() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    let id = view.question.id.clone();

    let mut findings = store.findings_for_question(&id).unwrap();
    findings[0].user_notes = Some("check the dosage used".to_string());
    store.put_findings(&findings).unwrap();

    let refreshed = m.refresh(&id).await.unwrap();

    assert_eq!(
        refreshed.findings[0].user_notes.as_deref(),
        Some("check the dosage used")
    );
    assert!(refreshed.findings[0].notes_last_updated.is_some());
    assert!(refreshed.question.orphaned_notes.is_empty());
}

#[tokio::test]
async fn a_note_is_orphaned_conserved_and_re_adopted() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    let original = "Magnesium supplementation improved sleep quality";
    evidence.script("p1", make_claim(original, 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    let id = view.question.id.clone();

    let mut findings = store.findings_for_question(&id).unwrap();
    findings[0].user_notes = Some("verify against the 2019 trial".to_string());
    store.put_findings(&findings).unwrap();

    // The claim text changes, so the finding disappears and the note orphans.
    evidence.script("p1", make_claim("Magnesium showed no effect on sleep onset", 0.8));
    let refreshed = m.refresh(&id).await.unwrap();
    assert!(refreshed.findings.iter().all(|f| f.user_notes.is_none()));
    assert_eq!(refreshed.question.orphaned_notes.len(), 1);
    assert_eq!(refreshed.question.orphaned_notes[0].finding_text, original);
    assert_eq!(
        refreshed.question.orphaned_notes[0].note,
        "verify against the 2019 trial"
    );

    // Orphans survive further refreshes untouched.
    let again = m.refresh(&id).await.unwrap();
    assert_eq!(again.question.orphaned_notes.len(), 1);

    // When the finding text comes back, the orphan re-attaches.
    evidence.script("p1", make_claim(original, 0.8));
    let restored = m.refresh(&id).await.unwrap();
    assert_eq!(
        restored.findings[0].user_notes.as_deref(),
        Some("verify against the 2019 trial")
    );
    assert!(restored.question.orphaned_notes.is_empty());
}

// ─── Idempotence and contradictions ───

#[tokio::test]
async fn refreshing_an_unchanged_library_reproduces_the_answer() {
    let (store, library, evidence, synthesis) = setup();
    for id in ["p1", "p2", "p3"] {
        library.add(make_paper(id, &format!("Sleep study {id}"), ""));
        evidence.script(id, make_claim("Magnesium supplementation improved sleep quality", 0.8));
    }
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    let id = view.question.id.clone();

    let first = m.refresh(&id).await.unwrap();
    let second = m.refresh(&id).await.unwrap();

    let describe = |v: &scholium_core::models::AnswerView| {
        let mut d: Vec<String> = v.findings.iter().map(|f| f.description.clone()).collect();
        d.sort();
        d
    };
    assert_eq!(describe(&first), describe(&second));
    assert_eq!(first.question.status, second.question.status);
    assert_eq!(first.question.confidence, second.question.confidence);
    assert_eq!(first.question.papers_used, second.question.papers_used);
}

#[tokio::test]
async fn contradictions_penalize_confidence_and_flag_findings() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Fasting glucose trial one", ""));
    library.add(make_paper("p2", "Fasting glucose trial two", ""));
    library.add(make_paper("p3", "Fasting glucose trial three", ""));
    evidence.script("p1", make_claim("Fasting glucose increased during the trial period", 0.8));
    evidence.script("p2", make_claim("Fasting glucose increased during the trial period", 0.8));
    evidence.script("p3", make_claim("Fasting glucose decreased during the trial period", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does fasting glucose change on this diet?").await.unwrap();

    assert_eq!(view.contradictions.len(), 1);
    let c = &view.contradictions[0];
    assert_eq!(c.majority_view.paper_count, 2);
    assert_eq!(c.minority_view.paper_count, 1);
    // Two findings cap the question at partial; 0.5 * 0.7.
    assert!((view.question.confidence.value() - 0.35).abs() < 1e-9);
    assert!(view.findings.iter().all(|f| f.has_contradiction));

    let stored = store.findings_for_question(&view.question.id).unwrap();
    assert!(stored.iter().all(|f| f.has_contradiction));
}

#[tokio::test]
async fn refresh_replaces_contradiction_rows_instead_of_patching() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Fasting glucose trial one", ""));
    library.add(make_paper("p2", "Fasting glucose trial two", ""));
    evidence.script("p1", make_claim("Fasting glucose increased during the trial period", 0.8));
    evidence.script("p2", make_claim("Fasting glucose decreased during the trial period", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does fasting glucose change on this diet?").await.unwrap();
    assert_eq!(view.contradictions.len(), 1);

    // The disagreement resolves; its row must disappear, not linger.
    evidence.script("p2", make_claim("Fasting glucose increased during the trial period", 0.8));
    let refreshed = m.refresh(&view.question.id).await.unwrap();

    assert!(refreshed.contradictions.is_empty());
    assert!(refreshed.findings.iter().all(|f| !f.has_contradiction));
    let finding_ids: Vec<String> = refreshed.findings.iter().map(|f| f.id.clone()).collect();
    assert!(store.contradictions_for_findings(&finding_ids).unwrap().is_empty());
}

#[tokio::test]
async fn papers_for_question_resolves_the_contributing_papers() {
    let (store, library, evidence, synthesis) = setup();
    library.add(make_paper("p1", "Magnesium and sleep", ""));
    library.add(make_paper("p2", "Sleep hygiene survey", ""));
    evidence.script("p1", make_claim("Magnesium supplementation improved sleep quality", 0.8));
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    let papers = m.papers_for_question(&view.question.id).await.unwrap();

    // p2 returned a non-relevant claim, so only p1 contributed.
    let ids: Vec<&str> = papers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1"]);
}

// ─── Audit ───

#[tokio::test]
async fn stored_status_and_confidence_match_the_audit_recomputation() {
    let (store, library, evidence, synthesis) = setup();
    for id in ["p1", "p2", "p3"] {
        library.add(make_paper(id, &format!("Sleep study {id}"), ""));
        evidence.script(id, make_claim("Magnesium supplementation improved sleep quality", 0.8));
    }
    let m = manager(&store, &library, &evidence, &synthesis);

    let view = m.answer("Does magnesium improve sleep?").await.unwrap();
    let (status, confidence) = m.audit(&view.question.id).unwrap();
    assert_eq!(status, view.question.status);
    assert_eq!(confidence, view.question.confidence);

    m.refresh(&view.question.id).await.unwrap();
    let stored = store.get_question(&view.question.id).unwrap().unwrap();
    let (status, confidence) = m.audit(&view.question.id).unwrap();
    assert_eq!(status, stored.status);
    assert_eq!(confidence, stored.confidence);
}
