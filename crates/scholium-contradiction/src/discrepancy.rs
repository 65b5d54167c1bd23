//! Discrepancy analysis: why might two bodies of evidence disagree?

use std::collections::HashMap;

use scholium_core::config::ContradictionConfig;
use scholium_core::models::{Finding, Paper};

/// Explanation used when nothing about populations can be compared
/// automatically; population extraction is out of scope.
pub const POPULATION_PLACEHOLDER: &str =
    "Study populations may differ between the two sides; population comparison is not automated.";

/// Material differences between the two sides of a contradiction.
#[derive(Debug, Clone, Default)]
pub struct DiscrepancyReport {
    pub methodological_differences: Vec<String>,
    pub possible_explanations: Vec<String>,
}

/// Compare study designs, full-text availability, and publication years
/// between the two sides. Each material difference yields one explanation.
pub fn analyze(
    majority: &Finding,
    minority: &Finding,
    papers: &HashMap<String, Paper>,
    config: &ContradictionConfig,
) -> DiscrepancyReport {
    let mut report = DiscrepancyReport::default();

    let maj_types = majority.study_types();
    let min_types = minority.study_types();
    if !maj_types.is_empty() && !min_types.is_empty() && maj_types != min_types {
        report.methodological_differences.push(format!(
            "Study designs differ: {} vs {}",
            label_set(&maj_types),
            label_set(&min_types)
        ));
        report
            .possible_explanations
            .push("Differences in study design may account for the opposing results.".to_string());
    }

    if let (Some(maj_ratio), Some(min_ratio)) = (
        availability_ratio(majority, papers),
        availability_ratio(minority, papers),
    ) {
        if (maj_ratio - min_ratio).abs() >= config.availability_gap_threshold {
            report.possible_explanations.push(
                "Full-text availability differs between the two sides; conclusions drawn from \
                 abstracts alone may be less reliable."
                    .to_string(),
            );
        }
    }

    if let (Some(maj_year), Some(min_year)) = (
        mean_publication_year(majority, papers),
        mean_publication_year(minority, papers),
    ) {
        let gap = (maj_year - min_year).abs();
        if gap > config.publication_year_gap_threshold as f64 {
            report.possible_explanations.push(format!(
                "The two bodies of evidence are about {:.0} years apart on average; older \
                 findings may not reflect current methods.",
                gap
            ));
        }
    }

    report
        .possible_explanations
        .push(POPULATION_PLACEHOLDER.to_string());

    report
}

fn label_set(types: &std::collections::BTreeSet<scholium_core::models::StudyType>) -> String {
    types
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fraction of a side's resolved papers with full text on hand.
/// None when no supporting paper resolves.
fn availability_ratio(finding: &Finding, papers: &HashMap<String, Paper>) -> Option<f64> {
    let resolved: Vec<&Paper> = finding
        .supporting_paper_ids()
        .iter()
        .filter_map(|id| papers.get(id))
        .collect();
    if resolved.is_empty() {
        return None;
    }
    let available = resolved.iter().filter(|p| p.full_text_available).count();
    Some(available as f64 / resolved.len() as f64)
}

/// Mean publication year over a side's dated papers.
fn mean_publication_year(finding: &Finding, papers: &HashMap<String, Paper>) -> Option<f64> {
    let years: Vec<i32> = finding
        .supporting_paper_ids()
        .iter()
        .filter_map(|id| papers.get(id))
        .filter_map(|p| p.publication_year())
        .collect();
    if years.is_empty() {
        return None;
    }
    Some(years.iter().map(|&y| y as f64).sum::<f64>() / years.len() as f64)
}
