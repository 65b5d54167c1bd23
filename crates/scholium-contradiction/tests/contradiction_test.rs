//! Tests for scholium-contradiction — discrepancy analysis and end-to-end
//! detection with resolved papers.

use std::collections::HashMap;

use chrono::Utc;

use scholium_contradiction::discrepancy::POPULATION_PLACEHOLDER;
use scholium_contradiction::ContradictionDetector;
use scholium_core::models::{
    Confidence, ConsistencyLevel, EvidenceSource, Finding, Paper, Severity, StudyType,
};
use test_fixtures::make_typed_paper;

fn finding(description: &str, paper_ids: &[&str], study_type: Option<StudyType>) -> Finding {
    Finding {
        id: format!("f-{}", description.replace(' ', "-")),
        question_id: "q1".to_string(),
        description: description.to_string(),
        evidence: paper_ids
            .iter()
            .map(|id| EvidenceSource {
                paper_id: id.to_string(),
                paper_title: format!("Paper {id}"),
                excerpt: format!("Excerpt from {id}"),
                study_type,
                sample_size: None,
                confidence: Confidence::new(0.8),
                date_added: Utc::now(),
            })
            .collect(),
        consistency: ConsistencyLevel::Medium,
        has_contradiction: false,
        quality_assessment: String::new(),
        user_notes: None,
        notes_last_updated: None,
    }
}

fn index(papers: Vec<Paper>) -> HashMap<String, Paper> {
    papers.into_iter().map(|p| (p.id.clone(), p)).collect()
}

// ─── Discrepancy analysis ───

#[test]
fn study_design_differences_are_named() {
    let detector = ContradictionDetector::default();
    let mut findings = vec![
        finding(
            "Bone density improved with resistance training",
            &["p1", "p2"],
            Some(StudyType::ClinicalTrial),
        ),
        finding(
            "Bone density worsened with resistance training",
            &["p3"],
            Some(StudyType::Observational),
        ),
    ];
    let papers = index(vec![
        make_typed_paper("p1", "Trial one", StudyType::ClinicalTrial, 2021),
        make_typed_paper("p2", "Trial two", StudyType::ClinicalTrial, 2022),
        make_typed_paper("p3", "Cohort", StudyType::Observational, 2021),
    ]);

    let result = detector.detect(&mut findings, &papers);

    assert_eq!(result.len(), 1);
    let c = &result[0];
    assert!(c
        .methodological_differences
        .iter()
        .any(|d| d.contains("clinical trial") && d.contains("observational study")));
    assert!(c
        .possible_explanations
        .iter()
        .any(|e| e.contains("study design")));
    assert!(c.conservative_interpretation.contains("Methodological differences"));
}

#[test]
fn publication_year_gap_is_flagged() {
    let detector = ContradictionDetector::default();
    let mut findings = vec![
        finding("Serum ferritin increased under supplementation", &["p1"], None),
        finding("Serum ferritin decreased under supplementation", &["p2"], None),
    ];
    let papers = index(vec![
        make_typed_paper("p1", "Old study", StudyType::Observational, 2008),
        make_typed_paper("p2", "New study", StudyType::Observational, 2023),
    ]);

    let result = detector.detect(&mut findings, &papers);

    assert_eq!(result.len(), 1);
    assert!(result[0]
        .possible_explanations
        .iter()
        .any(|e| e.contains("years apart")));
}

#[test]
fn population_placeholder_is_always_present() {
    let detector = ContradictionDetector::default();
    let mut findings = vec![
        finding("Reaction times improved after caffeine intake", &["p1"], None),
        finding("Reaction times worsened after caffeine intake", &["p2"], None),
    ];

    let result = detector.detect(&mut findings, &HashMap::new());

    assert_eq!(result.len(), 1);
    assert_eq!(
        result[0].possible_explanations.last().map(String::as_str),
        Some(POPULATION_PLACEHOLDER)
    );
}

#[test]
fn same_designs_and_years_yield_no_methodological_differences() {
    let detector = ContradictionDetector::default();
    let mut findings = vec![
        finding("Blood pressure was lower in the treated group", &["p1"], Some(StudyType::ClinicalTrial)),
        finding("Blood pressure was higher in the treated group", &["p2"], Some(StudyType::ClinicalTrial)),
    ];
    let papers = index(vec![
        make_typed_paper("p1", "Trial A", StudyType::ClinicalTrial, 2021),
        make_typed_paper("p2", "Trial B", StudyType::ClinicalTrial, 2022),
    ]);

    let result = detector.detect(&mut findings, &papers);

    assert_eq!(result.len(), 1);
    assert!(result[0].methodological_differences.is_empty());
    assert!(!result[0].conservative_interpretation.contains("Methodological differences"));
}

// ─── Severity and the ATP scenario ───

#[test]
fn two_versus_one_papers_is_a_minor_contradiction() {
    let detector = ContradictionDetector::default();
    let mut findings = vec![
        finding(
            "Mitochondrial ATP production increased by 20% under coenzyme supplementation",
            &["p1", "p2"],
            None,
        ),
        finding(
            "Mitochondrial ATP production decreased by 15% under coenzyme supplementation",
            &["p3"],
            None,
        ),
    ];

    let result = detector.detect(&mut findings, &HashMap::new());

    assert_eq!(result.len(), 1);
    let c = &result[0];
    assert_eq!(c.majority_view.paper_count, 2);
    assert_eq!(c.minority_view.paper_count, 1);
    assert_eq!(c.severity, Severity::Minor);
    assert_eq!(c.finding_id, findings[0].id);
    assert!(findings[0].has_contradiction);
    assert!(findings[1].has_contradiction);
}

#[test]
fn every_emitted_contradiction_is_unresolved_with_ordered_sides() {
    let detector = ContradictionDetector::default();
    let mut findings = vec![
        finding("Triglyceride levels were reduced after the diet", &["p1", "p2", "p3"], None),
        finding("Triglyceride levels were elevated after the diet", &["p4", "p5"], None),
    ];

    let result = detector.detect(&mut findings, &HashMap::new());

    for c in &result {
        assert!(c.sides_are_ordered());
        assert_eq!(
            c.status,
            scholium_core::models::ContradictionStatus::Unresolved
        );
    }
}
