//! Snapshot wire format.
//!
//! Captured statistics are stored as hiscores-style JSON:
//!
//! ```json
//! { "skills":   { "attack": { "rank": 1, "level": 99, "xp": 13034431 } },
//!   "minigames": { "lms": { "rank": -1, "score": -1 } },
//!   "bosses":   { "zulrah": { "rank": 12, "kills": 500 } } }
//! ```
//!
//! `-1` marks a value that was not tracked at capture time. Categories and
//! subcategories missing from the catalogue are dropped with a warning.

pub mod codec;

pub use codec::{parse_snapshot_bytes, parse_snapshot_value, snapshot_to_json};
