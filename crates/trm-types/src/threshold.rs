use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TypeError, TypeResult};

/// Maximum gap between two intervals that still lets them merge.
///
/// A gap strictly smaller than the threshold merges; a gap exactly equal to
/// it does not. Always finite and non-negative.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// No gap tolerance: only overlapping or touching intervals merge.
    pub const ZERO: Threshold = Threshold(0.0);

    /// Lenient normalization: non-finite values become zero, negative
    /// values clamp to zero.
    pub fn normalize(value: f64) -> Self {
        if value.is_finite() {
            Self(value.max(0.0) + 0.0)
        } else {
            Self::ZERO
        }
    }

    /// Strict constructor. Fails on NaN, infinities, and negative values.
    pub fn try_new(value: f64) -> TypeResult<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value + 0.0))
        } else {
            Err(TypeError::InvalidThreshold(value))
        }
    }

    /// Normalize a loosely-typed threshold.
    ///
    /// Only JSON numbers count. Numeric strings, `null`, and every other
    /// shape normalize to zero.
    pub fn from_value(value: &Value) -> Self {
        value.as_f64().map_or(Self::ZERO, Self::normalize)
    }

    /// The threshold as a plain number.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = TypeError;

    fn try_from(value: f64) -> TypeResult<Self> {
        Self::try_new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

impl fmt::Debug for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Threshold({})", self.0)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
