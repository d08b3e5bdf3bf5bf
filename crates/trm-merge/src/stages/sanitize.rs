use serde_json::Value;
use trm_types::{Interval, RawEntry, Rejection, SanitizePolicy};

/// Output of the sanitize stage: well-formed intervals, with counts of what
/// was dropped along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Sanitized {
    /// Accepted intervals in input order, each with `start <= end`.
    pub intervals: Vec<Interval>,
    /// Number of raw entries seen. Zero when the input was not an array.
    pub received: usize,
    /// Entries dropped for not being a pair.
    pub rejected_shape: usize,
    /// Entries dropped for a bound without a finite numeric value.
    pub rejected_numeric: usize,
}

impl Sanitized {
    fn empty() -> Self {
        Self {
            intervals: Vec::new(),
            received: 0,
            rejected_shape: 0,
            rejected_numeric: 0,
        }
    }

    /// Total number of dropped entries.
    pub fn rejected(&self) -> usize {
        self.rejected_shape + self.rejected_numeric
    }

    /// Returns `true` if no interval survived.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Validate and coerce raw input into intervals.
///
/// Malformed entries are dropped without complaint. A `ranges` value that is
/// not an array yields an empty result. The input is never modified. The
/// threshold is normalized separately, see [`trm_types::Threshold::from_value`].
pub fn sanitize(ranges: &Value, policy: &SanitizePolicy) -> Sanitized {
    let Some(entries) = ranges.as_array() else {
        return Sanitized::empty();
    };

    let mut out = Sanitized {
        intervals: Vec::with_capacity(entries.len()),
        received: entries.len(),
        ..Sanitized::empty()
    };
    for entry in entries {
        match RawEntry::new(entry).parse(policy) {
            Ok(interval) => out.intervals.push(interval),
            Err(Rejection::NotAPair) => out.rejected_shape += 1,
            Err(Rejection::NotNumeric) => out.rejected_numeric += 1,
        }
    }
    out
}
