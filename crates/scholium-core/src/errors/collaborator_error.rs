/// Text-generation collaborator errors (evidence extraction, synthesis).
///
/// Never propagated out of answer/refresh: a failed extraction degrades to a
/// non-relevant claim, a failed synthesis degrades to a neutral fallback.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("collaborator call timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("malformed collaborator response: {reason}")]
    Malformed { reason: String },

    #[error("provider error: {reason}")]
    Provider { reason: String },
}

pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
