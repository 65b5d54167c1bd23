//! # scholium-contradiction
//!
//! Pairwise contradiction detection between a question's findings: a topic
//! gate (token overlap), a conflict gate (opposite-direction result terms),
//! majority/minority side assignment, severity, discrepancy analysis, and a
//! conservative interpretation that never picks a winner.

pub mod conflict;
pub mod detector;
pub mod discrepancy;
pub mod interpretation;
pub mod overlap;

pub use detector::ContradictionDetector;
pub use discrepancy::DiscrepancyReport;
