//! The three merge pipeline stages, in evaluation order.

pub mod coalesce;
pub mod order;
pub mod sanitize;

pub use coalesce::coalesce;
pub use order::order;
pub use sanitize::{sanitize, Sanitized};
