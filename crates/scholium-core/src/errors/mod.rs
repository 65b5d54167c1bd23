//! Typed errors, split per subsystem and aggregated into [`ScholiumError`].
//!
//! Only two error kinds ever escape the lifecycle manager: a missing
//! question and a persistence failure. Collaborator errors exist as a type
//! so collaborator implementations can report failures precisely, but the
//! lifecycle absorbs them into degraded results.

mod collaborator_error;
mod store_error;

pub use collaborator_error::{CollaboratorError, CollaboratorResult};
pub use store_error::StoreError;

/// Top-level error for the Scholium engine.
#[derive(Debug, thiserror::Error)]
pub enum ScholiumError {
    #[error("question not found: {id}")]
    QuestionNotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

pub type ScholiumResult<T> = Result<T, ScholiumError>;
