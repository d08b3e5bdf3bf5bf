use thiserror::Error;

/// Errors produced by the strict type constructors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeError {
    #[error("non-finite {bound} bound: {value}")]
    NonFiniteBound { bound: &'static str, value: f64 },

    #[error("invalid threshold: {0} (must be finite and non-negative)")]
    InvalidThreshold(f64),
}

/// Convenience alias for type construction results.
pub type TypeResult<T> = Result<T, TypeError>;
