//! Plain-text summaries of deltas and ranking reports.
//!
//! Output is Markdown-flavoured text meant for terminals and chat posts.
//! Graphic output is out of scope.

pub mod summary;

pub use summary::{render_delta_summary, render_mvp_summary};
