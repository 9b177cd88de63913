//! # of_growth - Post-Match Stats and Hero Growth
//!
//! Turns a finished match's event log into:
//! - per-player box scores and a 0-10 match rating
//! - XP for the career hero, leveled into attribute points with
//!   carry-over between matches
//!
//! ## Features
//! - Deterministic: same events + roster = same result
//! - Pure computation stages; the player store is written once, last
//! - JSON API for easy integration with the game client

pub mod api;
pub mod config;
pub mod error;
pub mod growth;
pub mod models;
pub mod pipeline;
pub mod stats;

pub use api::{process_post_match_json, PostMatchRequest, PostMatchResponse};
pub use config::{GrowthConfig, RatingConfig, XpConfig};
pub use error::{GrowthError, Result};
pub use growth::{
    growth_threshold, AttributeMap, GrowthEngine, HeroActionTag, HeroMatchGrowth, HeroXpBucket,
    InMemoryPlayerStore, PlayerAttribute, PlayerRecord, PlayerStore, XpOverflow,
};
pub use models::{
    EventDetails, EventType, MatchEvent, Position, Roster, RosterEntry, RosterReader, TeamSide,
    TrackSlot,
};
pub use pipeline::{HeroContext, PostMatchPipeline, PostMatchReport};
pub use stats::{EventStatsExtractor, MatchOutcome, MatchStatsMap, PlayerMatchStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
