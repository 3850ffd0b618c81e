//! MVP ranking engine.
//!
//! Aggregates per-participant deltas across the roster and ranks, for every
//! catalogue subcategory, each team's best performer against the other
//! teams' best performers.
//!
//! ## Ranking rules
//!
//! - Within a team, the member with the strictly greatest difference wins;
//!   ties go to the member listed first.
//! - A team is represented only if its best difference is positive.
//! - Representatives are sorted descending with a stable sort, so equal
//!   differences keep team order.
//! - Index 0 of each list is the Event MVP; the rest are Team MVPs.

pub mod engine;
pub mod model;

pub use engine::{collect_deltas, get_all_mvps, get_specific_mvps, RosterDeltas, TeamDeltas};
pub use model::{MvpEntry, MvpReport, RankingMetrics, SkippedParticipant, Standing};
