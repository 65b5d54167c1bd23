/// Scholium system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Leading characters of the normalized finding text used as the grouping key.
pub const DEFAULT_GROUPING_PREFIX_LEN: usize = 100;

/// Minimum token-set Jaccard similarity for two findings to share a topic.
pub const DEFAULT_TOPIC_OVERLAP_THRESHOLD: f64 = 0.6;

/// Tokens shorter than this are ignored by keyword matching and topic overlap.
pub const MIN_TOKEN_LEN: usize = 4;

/// Publication-year gap (in years) beyond which evidence age becomes a
/// plausible explanation for a contradiction.
pub const DEFAULT_PUBLICATION_YEAR_GAP: i32 = 3;

/// Full-text-availability ratio gap treated as a quality difference.
pub const DEFAULT_AVAILABILITY_GAP: f64 = 0.5;

/// Confidence multiplier applied when any contradiction exists.
pub const CONTRADICTION_PENALTY: f64 = 0.7;

/// Fixed base confidence for an answered question after a refresh.
pub const REFRESH_BASE_CONFIDENCE: f64 = 0.8;

/// Ceiling on the consistency-ratio confidence of an initial answer.
pub const MAX_INITIAL_CONFIDENCE: f64 = 0.9;

/// Confidence assigned to partially answered questions.
pub const PARTIAL_CONFIDENCE: f64 = 0.5;

/// Minimum findings for a question to count as answered.
pub const ANSWERED_MIN_FINDINGS: usize = 3;

/// Minimum contributing papers for a question to count as answered.
pub const ANSWERED_MIN_PAPERS: usize = 3;

/// Supporting papers required on both sides for a major contradiction.
pub const MAJOR_BOTH_SIDES_MIN_PAPERS: usize = 2;

/// Combined paper count required for the clinical-trial major rule.
pub const MAJOR_TRIAL_TOTAL_PAPERS: usize = 3;

/// Common English stop words excluded from question keyword matching.
pub const STOP_WORDS: &[&str] = &[
    "about", "after", "also", "among", "been", "before", "being", "between", "both", "could",
    "does", "doing", "during", "each", "from", "have", "having", "into", "more", "most", "other",
    "over", "same", "should", "since", "some", "such", "than", "that", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "under", "until", "very", "what",
    "when", "where", "which", "while", "will", "with", "would", "your",
];
