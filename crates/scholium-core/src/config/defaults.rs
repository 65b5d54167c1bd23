//! Default values shared between config structs and the constants module.

use crate::constants;

pub const DEFAULT_GROUPING_PREFIX_LEN: usize = constants::DEFAULT_GROUPING_PREFIX_LEN;
pub const DEFAULT_HIGH_CONSISTENCY_MIN_PAPERS: usize = 3;
pub const DEFAULT_HIGH_CONSISTENCY_MIN_CONFIDENCE: f64 = 0.7;

pub const DEFAULT_TOPIC_OVERLAP_THRESHOLD: f64 = constants::DEFAULT_TOPIC_OVERLAP_THRESHOLD;
pub const DEFAULT_PUBLICATION_YEAR_GAP: i32 = constants::DEFAULT_PUBLICATION_YEAR_GAP;
pub const DEFAULT_AVAILABILITY_GAP: f64 = constants::DEFAULT_AVAILABILITY_GAP;

pub const DEFAULT_MIN_TOKEN_LEN: usize = constants::MIN_TOKEN_LEN;

pub const DEFAULT_REFRESH_BASE_CONFIDENCE: f64 = constants::REFRESH_BASE_CONFIDENCE;
pub const DEFAULT_MAX_INITIAL_CONFIDENCE: f64 = constants::MAX_INITIAL_CONFIDENCE;
pub const DEFAULT_PARTIAL_CONFIDENCE: f64 = constants::PARTIAL_CONFIDENCE;
pub const DEFAULT_CONTRADICTION_PENALTY: f64 = constants::CONTRADICTION_PENALTY;
pub const DEFAULT_ANSWERED_MIN_FINDINGS: usize = constants::ANSWERED_MIN_FINDINGS;
pub const DEFAULT_ANSWERED_MIN_PAPERS: usize = constants::ANSWERED_MIN_PAPERS;
