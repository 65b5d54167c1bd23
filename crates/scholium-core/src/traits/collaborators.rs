use async_trait::async_trait;

use crate::errors::CollaboratorResult;
use crate::models::{ExtractedClaim, Finding, Paper, Synthesis};

/// Extracts one claim from one paper for a given question.
///
/// A failing call degrades that paper to a non-relevant claim; it never
/// aborts the batch.
#[async_trait]
pub trait EvidenceCollaborator: Send + Sync {
    async fn extract(&self, paper: &Paper, question: &str) -> CollaboratorResult<ExtractedClaim>;
}

/// Produces an advisory confidence estimate and a gap list from the final
/// finding set.
#[async_trait]
pub trait SynthesisCollaborator: Send + Sync {
    async fn synthesize(
        &self,
        findings: &[Finding],
        question: &str,
    ) -> CollaboratorResult<Synthesis>;
}

/// Rejects generated text containing disallowed absolute/causal terms.
pub trait LanguageValidator: Send + Sync {
    /// Returns true when the text is acceptable.
    fn check(&self, text: &str) -> bool;
}
