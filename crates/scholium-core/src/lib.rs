//! # scholium-core
//!
//! Foundation crate for the Scholium research library engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScholiumConfig;
pub use errors::{CollaboratorError, ScholiumError, ScholiumResult, StoreError};
pub use models::{
    Confidence, ConsistencyLevel, Contradiction, EvidenceSource, Finding, Paper, QuestionStatus,
    ResearchQuestion,
};
