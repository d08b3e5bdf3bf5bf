use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// A closed time range `[start, end]` over finite timestamps.
///
/// Timestamps are plain numbers in a single caller-chosen unit; the type
/// attaches no calendar or timezone meaning to them.
///
/// # Invariants
///
/// Both bounds are finite and `start <= end`. Negative zero is normalized to
/// positive zero on construction, so equality and [`Ord`] agree.
///
/// Ordering: `start` → `end` (total order).
///
/// On the wire an interval is the two-element array `[start, end]`.
/// Deserialization goes through [`Interval::try_new`], so a reversed pair is
/// swapped and a non-finite bound is rejected.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Create an interval from two bounds in either order.
    ///
    /// # Panics
    ///
    /// Panics if either bound is NaN or infinite. Use [`Self::try_new`] for
    /// untrusted input.
    pub fn new(a: f64, b: f64) -> Self {
        assert!(
            a.is_finite() && b.is_finite(),
            "Invalid interval: bounds must be finite (got {a}, {b})"
        );
        Self::from_finite(a, b)
    }

    /// Create an interval from two bounds in either order.
    ///
    /// A reversed pair is swapped so that `start <= end`. Returns
    /// [`TypeError::NonFiniteBound`] if either bound is NaN or infinite.
    pub fn try_new(a: f64, b: f64) -> TypeResult<Self> {
        if !a.is_finite() {
            return Err(TypeError::NonFiniteBound {
                bound: "start",
                value: a,
            });
        }
        if !b.is_finite() {
            return Err(TypeError::NonFiniteBound {
                bound: "end",
                value: b,
            });
        }
        Ok(Self::from_finite(a, b))
    }

    /// Create an interval from bounds already known to be finite and ordered.
    ///
    /// Intended for the merge sweep, which only ever recombines bounds taken
    /// from existing intervals. The invariants are checked in debug builds.
    #[inline]
    pub fn new_unchecked(start: f64, end: f64) -> Self {
        debug_assert!(
            start.is_finite() && end.is_finite() && start <= end,
            "Invalid interval: [{start}, {end}]"
        );
        Self { start, end }
    }

    fn from_finite(a: f64, b: f64) -> Self {
        // `x + 0.0` maps -0.0 to +0.0 and leaves everything else alone.
        let (a, b) = (a + 0.0, b + 0.0);
        if a > b {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Inclusive upper bound.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// `end - start`. Zero for a point interval.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if `point` lies within `[start, end]`.
    #[inline]
    pub fn contains(&self, point: f64) -> bool {
        self.start <= point && point <= self.end
    }

    /// Returns `true` if `other` lies entirely within this interval.
    #[inline]
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Distance from the end of this interval to the start of `other`.
    ///
    /// Negative when the two overlap, zero when they touch.
    #[inline]
    pub fn gap_to(&self, other: &Self) -> f64 {
        other.start - self.end
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .total_cmp(&other.start)
            .then(self.end.total_cmp(&other.end))
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = TypeError;

    fn try_from((a, b): (f64, f64)) -> TypeResult<Self> {
        Self::try_new(a, b)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(iv: Interval) -> Self {
        (iv.start, iv.end)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval[{}, {}]", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
