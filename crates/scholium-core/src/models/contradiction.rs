use serde::{Deserialize, Serialize};

/// A detected disagreement between two findings sharing a topic but
/// reporting opposite-direction results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contradiction {
    /// UUID v4 identifier.
    pub id: String,
    /// The majority-side finding this contradiction is anchored to.
    pub finding_id: String,
    /// Shared topic tokens of the two findings.
    pub topic: String,
    pub majority_view: ContradictionView,
    pub minority_view: ContradictionView,
    pub severity: Severity,
    pub methodological_differences: Vec<String>,
    pub possible_explanations: Vec<String>,
    /// Templated prose that never asserts which side is correct.
    pub conservative_interpretation: String,
    pub status: ContradictionStatus,
}

impl Contradiction {
    /// Invariant check: the majority side is never the lighter one.
    pub fn sides_are_ordered(&self) -> bool {
        self.majority_view.paper_count >= self.minority_view.paper_count
    }
}

/// One side of a contradiction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContradictionView {
    pub description: String,
    pub paper_ids: Vec<String>,
    /// Representative evidence text for this side.
    pub evidence: String,
    pub paper_count: usize,
}

/// How serious a contradiction is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Major,
    Minor,
}

/// Triage state of a contradiction. Detection always emits `Unresolved`;
/// the other states are set by the user and round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionStatus {
    #[default]
    Unresolved,
    Acknowledged,
    Resolved,
}
