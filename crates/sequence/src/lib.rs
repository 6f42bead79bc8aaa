//! Pull-based arithmetic sequences for the iterator panel.
//!
//! - [`NumberSequence`]: lazy, finite, forward-only progression
//! - [`SequenceResult`]: outcome of one pull
//! - [`BoundedRun`]: values gathered under a safety limit

pub mod bounded;
pub mod generator;

pub use bounded::BoundedRun;
pub use generator::{NumberSequence, SequenceResult, DEFAULT_STEP};
