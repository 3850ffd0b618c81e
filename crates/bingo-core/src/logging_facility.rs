//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Op-boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use bingo_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Only entry points (the ranking pass, CLI commands) own an op boundary.
//! Lower layers log with plain `tracing::debug!` / `tracing::warn!`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
