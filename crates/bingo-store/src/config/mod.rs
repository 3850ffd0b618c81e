//! Event configuration
//!
//! ```yaml
//! teams:
//!   - name: Team A
//!     members: [p1, p2]
//!   - name: Team B
//!     members: [p3]
//! ranking:          # optional, defaults skills=xp minigames=score bosses=kills
//!   skills: level
//! ```
//!
//! `.json` files are read as JSON, everything else as YAML.

pub mod format;
pub mod parser;

pub use format::{EventConfig, RankingOverrides};
pub use parser::{load_event_config, parse_event_config_str, ConfigFormat};
