//! Snapshot delta engine.
//!
//! Compares a participant's "before" and "after" snapshots and produces a
//! [`Delta`](crate::model::Delta) with the same shape as "after".
//!
//! ## Entry point
//!
//! ```ignore
//! use bingo_core::delta::compute_delta;
//!
//! let delta = compute_delta(&before, &after);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: inputs are never mutated; every call builds a fresh delta.
//! - **Totality**: every metric of every subcategory present in "after" gets a
//!   defined value; there are no error conditions.
//! - **Sentinel safety**: an untracked "before" value is never subtracted, and
//!   no output leaf equals `-1` (a result of exactly `-1` is coerced to `0`).

pub mod engine;

pub use engine::{compute_delta, participant_delta, resolve_stat};
