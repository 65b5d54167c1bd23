use async_trait::async_trait;

use crate::errors::ScholiumResult;
use crate::models::Paper;

/// Read access to the personal paper library.
/// Ingestion (DOI/PMID/PDF parsing, PubMed search) lives behind this trait.
#[async_trait]
pub trait PaperLibrary: Send + Sync {
    /// Every paper in the library.
    async fn list_papers(&self) -> ScholiumResult<Vec<Paper>>;

    /// Resolve papers by id; unknown ids are silently skipped.
    async fn get_papers_by_ids(&self, ids: &[String]) -> ScholiumResult<Vec<Paper>>;
}
