use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use trm_types::{Interval, Threshold};

use crate::config::MergeConfig;
use crate::error::MergeResult;
use crate::stages::{coalesce, order, sanitize};

// ---------------------------------------------------------------------------
// MergeStats / MergeOutcome
// ---------------------------------------------------------------------------

/// Bookkeeping from a single merge invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MergeStats {
    /// Raw entries seen. Zero when the input was not an array.
    pub received: usize,
    /// Entries that became intervals.
    pub accepted: usize,
    /// Entries dropped for not being a pair.
    pub rejected_shape: usize,
    /// Entries dropped for a non-numeric or non-finite bound.
    pub rejected_numeric: usize,
    /// Intervals in the merged output.
    pub emitted: usize,
    /// Threshold actually applied.
    pub threshold: f64,
}

/// The merged intervals together with the stats of the run that built them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergeOutcome {
    /// Sorted, pairwise non-overlapping intervals.
    pub intervals: Vec<Interval>,
    pub stats: MergeStats,
}

impl MergeOutcome {
    /// Discard the stats.
    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }
}

// ---------------------------------------------------------------------------
// IntervalMerger
// ---------------------------------------------------------------------------

/// Runs the sanitize → order → coalesce pipeline.
///
/// The merger holds only its configuration; every call works on its own
/// copies, so a single merger can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct IntervalMerger {
    config: MergeConfig,
}

impl IntervalMerger {
    /// Create a merger without validating `config`.
    ///
    /// An invalid default threshold is normalized at use.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Create a merger, rejecting an invalid configuration up front.
    pub fn try_new(config: MergeConfig) -> MergeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The current configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge loosely-typed ranges with a loosely-typed threshold.
    ///
    /// Never fails: malformed entries are dropped, and a `ranges` value that
    /// is not an array (or holds nothing usable) produces an empty outcome.
    /// A threshold that is not a non-negative finite number acts as zero.
    pub fn merge(&self, ranges: &Value, threshold: &Value) -> MergeOutcome {
        self.run(ranges, Threshold::from_value(threshold))
    }

    /// Merge loosely-typed ranges using the configured default threshold.
    pub fn merge_default(&self, ranges: &Value) -> MergeOutcome {
        self.run(ranges, self.config.threshold())
    }

    fn run(&self, ranges: &Value, threshold: Threshold) -> MergeOutcome {
        let sanitized = sanitize(ranges, &self.config.sanitize);
        let mut stats = MergeStats {
            received: sanitized.received,
            accepted: sanitized.intervals.len(),
            rejected_shape: sanitized.rejected_shape,
            rejected_numeric: sanitized.rejected_numeric,
            emitted: 0,
            threshold: threshold.value(),
        };

        if sanitized.is_empty() {
            trace!(received = stats.received, "nothing to merge");
            return MergeOutcome {
                intervals: Vec::new(),
                stats,
            };
        }

        let ordered = order(sanitized.intervals);
        let intervals = coalesce(&ordered, threshold);
        stats.emitted = intervals.len();

        debug!(
            received = stats.received,
            accepted = stats.accepted,
            rejected = sanitized.rejected_shape + sanitized.rejected_numeric,
            emitted = stats.emitted,
            threshold = stats.threshold,
            "time ranges merged"
        );

        MergeOutcome { intervals, stats }
    }

    /// Merge already-typed intervals, skipping the sanitize stage.
    pub fn merge_intervals<I>(&self, intervals: I, threshold: Threshold) -> Vec<Interval>
    where
        I: IntoIterator<Item = Interval>,
    {
        let ordered = order(intervals.into_iter().collect());
        let merged = coalesce(&ordered, threshold);
        debug!(
            accepted = ordered.len(),
            emitted = merged.len(),
            threshold = threshold.value(),
            "intervals merged"
        );
        merged
    }
}
