//! Note reconciliation across a refresh.
//!
//! User notes are keyed by the exact description of the finding they were
//! written on. When a refresh regenerates that description, the note
//! reattaches; otherwise it is kept as an orphan. Reattached plus orphaned
//! notes always equal the incoming note set — nothing is lost or duplicated.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use scholium_core::models::{Finding, OrphanedNote};

/// Build the description → note map for a refresh.
///
/// Previously orphaned notes participate too, so an orphan whose finding
/// text reappears in a later refresh is re-adopted. Notes on current
/// findings win a key collision.
pub fn build_note_map(
    findings: &[Finding],
    orphaned: &[OrphanedNote],
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for orphan in orphaned {
        map.insert(orphan.finding_text.clone(), orphan.note.clone());
    }
    for finding in findings {
        if let Some(note) = &finding.user_notes {
            map.insert(finding.description.clone(), note.clone());
        }
    }
    map
}

/// Attach notes to regenerated findings by exact description match; each
/// note attaches at most once. Whatever remains unclaimed becomes the new
/// orphan set, verbatim.
pub fn reconcile(
    findings: &mut [Finding],
    mut note_map: BTreeMap<String, String>,
    now: DateTime<Utc>,
) -> Vec<OrphanedNote> {
    for finding in findings.iter_mut() {
        if let Some(note) = note_map.remove(&finding.description) {
            finding.user_notes = Some(note);
            finding.notes_last_updated = Some(now);
        }
    }

    note_map
        .into_iter()
        .map(|(finding_text, note)| OrphanedNote { finding_text, note })
        .collect()
}
