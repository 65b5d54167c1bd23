use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// The study design reported for a paper or extracted claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyType {
    ClinicalTrial,
    Observational,
    MetaAnalysis,
    SystematicReview,
    CaseReport,
    AnimalStudy,
    InVitro,
    Review,
    Unspecified,
}

impl StudyType {
    /// Clinical trials carry extra weight in contradiction severity.
    pub fn is_clinical_trial(self) -> bool {
        matches!(self, StudyType::ClinicalTrial)
    }

    /// Human-readable label used in explanations.
    pub fn label(self) -> &'static str {
        match self {
            StudyType::ClinicalTrial => "clinical trial",
            StudyType::Observational => "observational study",
            StudyType::MetaAnalysis => "meta-analysis",
            StudyType::SystematicReview => "systematic review",
            StudyType::CaseReport => "case report",
            StudyType::AnimalStudy => "animal study",
            StudyType::InVitro => "in vitro study",
            StudyType::Review => "review",
            StudyType::Unspecified => "unspecified design",
        }
    }
}

impl std::fmt::Display for StudyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One paper in the personal library, as exposed by the library collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Stable library identifier.
    pub id: String,
    pub title: String,
    /// Abstract text; keyword pre-filtering matches against title + abstract.
    pub abstract_text: String,
    pub study_type: Option<StudyType>,
    pub publication_date: Option<DateTime<Utc>>,
    /// Whether the full text is on hand (quality proxy for discrepancy analysis).
    pub full_text_available: bool,
}

impl Paper {
    /// Publication year, if a publication date is recorded.
    pub fn publication_year(&self) -> Option<i32> {
        self.publication_date.map(|d| d.year())
    }
}
