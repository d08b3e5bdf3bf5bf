//! Foundation types for time range merging.
//!
//! This crate provides the value types every stage of the merge pipeline
//! works with. Raw, loosely-typed input is coerced into [`Interval`]s here;
//! nothing downstream ever sees an unvalidated pair.
//!
//! # Key Types
//!
//! - [`Interval`] -- Closed `[start, end]` range of finite timestamps, `start <= end`
//! - [`Threshold`] -- Non-negative gap tolerance for a single merge
//! - [`RawEntry`] -- Explicit coercion of a JSON value into an [`Interval`]
//! - [`SanitizePolicy`] -- Which raw shapes the coercion accepts
//! - [`Rejection`] -- Why a raw entry was dropped

pub mod error;
pub mod interval;
pub mod raw;
pub mod threshold;

pub use error::{TypeError, TypeResult};
pub use interval::Interval;
pub use raw::{RawEntry, Rejection, SanitizePolicy};
pub use threshold::Threshold;
