//! Match statistics
//!
//! - `player_stats`: per-player box score (`PlayerMatchStats`)
//! - `extractor`: event log → box scores (`EventStatsExtractor`)
//! - `rating`: box score → 0-10 match rating

pub mod extractor;
pub mod player_stats;
pub mod rating;

pub use extractor::{EventStatsExtractor, MatchStatsMap};
pub use player_stats::{PlayerMatchStats, FULL_MATCH_MINUTES};
pub use rating::{rate, MatchOutcome, PositionMultipliers};
