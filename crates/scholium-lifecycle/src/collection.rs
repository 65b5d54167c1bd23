//! Concurrent per-paper evidence collection.

use futures::future::join_all;
use tracing::warn;

use scholium_core::models::{ExtractedClaim, Paper};
use scholium_core::traits::EvidenceCollaborator;

/// Issue one extraction call per paper, concurrently, and await the batch.
///
/// Results come back aligned to the input paper order regardless of
/// completion order, so downstream grouping is reproducible. A failed call
/// degrades that paper to a non-relevant claim and never aborts the batch.
pub async fn collect_claims(
    evidence: &dyn EvidenceCollaborator,
    papers: &[Paper],
    question: &str,
) -> Vec<(Paper, ExtractedClaim)> {
    let calls = papers.iter().map(|paper| evidence.extract(paper, question));
    let results = join_all(calls).await;

    papers
        .iter()
        .zip(results)
        .map(|(paper, result)| {
            let claim = match result {
                Ok(claim) => claim,
                Err(error) => {
                    warn!(
                        paper_id = %paper.id,
                        %error,
                        "evidence extraction failed; treating paper as non-relevant"
                    );
                    ExtractedClaim::not_relevant()
                }
            };
            (paper.clone(), claim)
        })
        .collect()
}
