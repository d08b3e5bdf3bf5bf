use serde::{Deserialize, Serialize};
use trm_types::{SanitizePolicy, Threshold};

use crate::error::MergeResult;

/// Configuration for the interval merge pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Threshold used by [`crate::IntervalMerger::merge_default`]. Must be
    /// finite and non-negative.
    pub default_threshold: f64,
    /// Which raw entry shapes the sanitize stage accepts.
    pub sanitize: SanitizePolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            default_threshold: 0.0,
            sanitize: SanitizePolicy::default(),
        }
    }
}

impl MergeConfig {
    /// Only exact two-element arrays of JSON numbers are accepted.
    pub fn strict() -> Self {
        Self {
            sanitize: SanitizePolicy::strict(),
            ..Default::default()
        }
    }

    /// Numeric strings and over-long arrays are accepted; extra elements
    /// past the first two are ignored.
    pub fn lenient() -> Self {
        Self {
            sanitize: SanitizePolicy::lenient(),
            ..Default::default()
        }
    }

    /// Builder-style override of the default threshold.
    pub fn with_default_threshold(mut self, threshold: f64) -> Self {
        self.default_threshold = threshold;
        self
    }

    /// Check that every configured value is usable.
    pub fn validate(&self) -> MergeResult<()> {
        Threshold::try_new(self.default_threshold)?;
        Ok(())
    }

    /// The default threshold, normalized. Negative or non-finite values
    /// become zero.
    pub fn threshold(&self) -> Threshold {
        Threshold::normalize(self.default_threshold)
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> MergeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
