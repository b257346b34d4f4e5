//! Check execution and aggregation (no IO).
//!
//! Input: registered checks plus a caller-supplied context.
//! Output: an immutable report of per-check outcomes with summary counts.

#![forbid(unsafe_code)]

pub mod checks;
pub mod context;
pub mod error;
pub mod fingerprint;
pub mod outcome;
pub mod report;

mod check;
mod runner;

pub use check::{Check, CheckMetadata, CheckSettings};
pub use context::Context;
pub use error::{CheckError, ContextError};
pub use outcome::Outcome;
pub use report::Report;
pub use runner::{Runner, RunnerOptions};

/// Re-exported so custom checks can implement [`Check`] without a direct dependency.
pub use async_trait::async_trait;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
