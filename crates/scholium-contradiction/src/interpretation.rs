//! Conservative interpretation prose.

use scholium_core::models::ContradictionView;

/// Templated interpretation that weighs the sides without ever asserting
/// which one is correct.
pub fn conservative_interpretation(
    majority: &ContradictionView,
    minority: &ContradictionView,
    has_methodological_differences: bool,
) -> String {
    let mut text = format!(
        "Most evidence ({} papers) supports {}, however {} paper(s) found {}. ",
        majority.paper_count, majority.description, minority.paper_count, minority.description
    );
    if has_methodological_differences {
        text.push_str("Methodological differences between the studies may explain the discrepancy. ");
    }
    text.push_str("More research is needed to resolve this contradiction.");
    text
}
