//! Time range merging.
//!
//! Normalizes a collection of time intervals into a minimal, sorted,
//! non-overlapping set. Intervals whose gap is strictly smaller than a
//! threshold are treated as continuous and merged.
//!
//! The pipeline has three stages:
//!
//! 1. [`stages::sanitize`] -- coerce raw JSON entries into [`Interval`]s,
//!    silently dropping anything malformed
//! 2. [`stages::order`] -- sort by start, then end
//! 3. [`stages::coalesce`] -- one forward sweep merging overlapping, touching,
//!    or near intervals
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trm_merge::merge_time_ranges;
//!
//! let merged = merge_time_ranges(&json!([[0, 10], [12, 20], [40, 50]]), &json!(5));
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0].start(), 0.0);
//! assert_eq!(merged[0].end(), 20.0);
//! ```

pub mod config;
pub mod error;
pub mod merger;
pub mod stages;

// Re-exports for convenience.
pub use config::MergeConfig;
pub use error::{MergeError, MergeResult};
pub use merger::{IntervalMerger, MergeOutcome, MergeStats};
pub use trm_types::{Interval, SanitizePolicy, Threshold};

use serde_json::Value;

/// Merge loosely-typed time ranges with the default configuration.
///
/// `ranges` should be an array of `[start, end]` pairs; `threshold` a
/// non-negative number. Anything else degrades gracefully: malformed entries
/// are dropped, a non-number or negative threshold acts as zero, and a
/// non-array `ranges` yields an empty result. This function never panics.
pub fn merge_time_ranges(ranges: &Value, threshold: &Value) -> Vec<Interval> {
    IntervalMerger::default()
        .merge(ranges, threshold)
        .into_intervals()
}

/// Merge typed intervals. The threshold is normalized first.
pub fn merge_intervals<I>(intervals: I, threshold: f64) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    IntervalMerger::default().merge_intervals(intervals, Threshold::normalize(threshold))
}
