//! Shared test fixtures for the Scholium workspace: paper and claim
//! builders, scripted stub collaborators with call counters, and an
//! in-memory store/library pair for lifecycle tests.

mod memory_store;
mod stubs;

pub use memory_store::{MemoryLibrary, MemoryStore};
pub use stubs::{AcceptAllValidator, StubEvidence, StubSynthesis};

use chrono::{TimeZone, Utc};

use scholium_core::models::{Confidence, ExtractedClaim, Paper, StudyType};

/// A paper with sensible defaults; publication year and study type are the
/// knobs discrepancy analysis cares about.
pub fn make_paper(id: &str, title: &str, abstract_text: &str) -> Paper {
    Paper {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        study_type: None,
        publication_date: Some(Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap()),
        full_text_available: true,
    }
}

/// Same, with an explicit study type and publication year.
pub fn make_typed_paper(
    id: &str,
    title: &str,
    study_type: StudyType,
    year: i32,
) -> Paper {
    Paper {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: String::new(),
        study_type: Some(study_type),
        publication_date: Some(Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap()),
        full_text_available: true,
    }
}

/// A relevant claim with the given finding text.
pub fn make_claim(finding: &str, confidence: f64) -> ExtractedClaim {
    ExtractedClaim {
        relevant: true,
        finding: Some(finding.to_string()),
        evidence: Some(format!("Reported: {finding}")),
        study_type: None,
        sample_size: None,
        limitations: Vec::new(),
        confidence: Confidence::new(confidence),
    }
}
