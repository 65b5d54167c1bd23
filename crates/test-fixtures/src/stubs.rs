//! Scripted stand-ins for the text-generation collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use scholium_core::errors::{CollaboratorError, CollaboratorResult};
use scholium_core::models::{ExtractedClaim, Finding, Paper, Synthesis};
use scholium_core::traits::{EvidenceCollaborator, LanguageValidator, SynthesisCollaborator};

/// Evidence collaborator scripted per paper id. Unscripted papers come back
/// non-relevant; papers in the failure set error out. Counts every call so
/// tests can assert how many extractions were issued.
#[derive(Default)]
pub struct StubEvidence {
    claims: Mutex<HashMap<String, ExtractedClaim>>,
    failing: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl StubEvidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the claim returned for a paper id.
    pub fn script(&self, paper_id: &str, claim: ExtractedClaim) {
        self.claims
            .lock()
            .unwrap()
            .insert(paper_id.to_string(), claim);
    }

    /// Make extraction fail for a paper id.
    pub fn fail_for(&self, paper_id: &str) {
        self.failing.lock().unwrap().push(paper_id.to_string());
    }

    /// Number of extraction calls issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EvidenceCollaborator for StubEvidence {
    async fn extract(&self, paper: &Paper, _question: &str) -> CollaboratorResult<ExtractedClaim> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(&paper.id) {
            return Err(CollaboratorError::Provider {
                reason: format!("scripted failure for {}", paper.id),
            });
        }
        Ok(self
            .claims
            .lock()
            .unwrap()
            .get(&paper.id)
            .cloned()
            .unwrap_or_else(ExtractedClaim::not_relevant))
    }
}

/// Synthesis collaborator returning a fixed result, optionally failing.
pub struct StubSynthesis {
    result: Synthesis,
    fail: bool,
    calls: AtomicUsize,
}

impl StubSynthesis {
    pub fn new(result: Synthesis) -> Self {
        Self {
            result,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Synthesis::neutral(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StubSynthesis {
    fn default() -> Self {
        Self::new(Synthesis::neutral())
    }
}

#[async_trait]
impl SynthesisCollaborator for StubSynthesis {
    async fn synthesize(
        &self,
        _findings: &[Finding],
        _question: &str,
    ) -> CollaboratorResult<Synthesis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CollaboratorError::Provider {
                reason: "scripted synthesis failure".to_string(),
            });
        }
        Ok(self.result.clone())
    }
}

/// Validator that accepts everything, for tests that are not about language.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

impl LanguageValidator for AcceptAllValidator {
    fn check(&self, _text: &str) -> bool {
        true
    }
}
