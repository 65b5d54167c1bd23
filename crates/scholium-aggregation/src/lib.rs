//! # scholium-aggregation
//!
//! Groups per-paper extracted claims into canonical findings. Each group of
//! claims sharing a grouping key becomes one finding; each claim becomes one
//! evidence source attached to it.

pub mod aggregator;
pub mod grouping;

pub use aggregator::FindingAggregator;
pub use grouping::{GroupingStrategy, PrefixGrouping};
