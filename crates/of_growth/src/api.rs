//! JSON API for the post-match pipeline
//!
//! Single entry point for engine integration: events, roster, score and the
//! player store go in as one JSON document; stats, the hero's growth and the
//! updated store come back out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GrowthConfig;
use crate::growth::{HeroMatchGrowth, InMemoryPlayerStore};
use crate::models::{MatchEvent, Roster, TeamSide};
use crate::pipeline::{HeroContext, PostMatchPipeline};
use crate::stats::{MatchOutcome, PlayerMatchStats};

pub const API_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMatchRequest {
    pub schema_version: u8,
    pub events: Vec<MatchEvent>,
    /// Slot order, 22 entries at most; `null` for an empty slot.
    pub roster: Option<Roster>,
    pub home_goals: u8,
    pub away_goals: u8,
    #[serde(default)]
    pub hero: Option<HeroContext>,
    #[serde(default)]
    pub players: InMemoryPlayerStore,
    /// Overrides `OF_GROWTH_CONFIG` / defaults when present.
    #[serde(default)]
    pub config: Option<GrowthConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMatchResponse {
    pub schema_version: u8,
    pub home_outcome: MatchOutcome,
    /// Flattened per-player records keyed by player id
    pub player_stats: BTreeMap<String, BTreeMap<String, f64>>,
    pub stats: Vec<PlayerMatchStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_growth: Option<HeroMatchGrowth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_summary: Option<String>,
    pub players: InMemoryPlayerStore,
}

/// Run the post-match pipeline from a JSON request.
pub fn process_post_match_json(request_json: &str) -> Result<String, String> {
    let request: PostMatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != API_SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let config = match request.config {
        Some(config) => {
            config.validate().map_err(|e| e.to_string())?;
            config
        }
        None => GrowthConfig::from_env_or_default(),
    };

    match &request.roster {
        Some(roster) if roster.is_empty() => warn!("post-match roster has no players"),
        Some(_) => {}
        None => warn!("post-match request without roster"),
    }

    let home_outcome =
        MatchOutcome::from_score(request.home_goals, request.away_goals, TeamSide::Home);
    let mut players = request.players;

    let report = PostMatchPipeline::new(config)
        .run(
            &request.events,
            request.roster.as_ref(),
            home_outcome,
            request.hero.as_ref(),
            &mut players,
        )
        .map_err(|e| e.to_string())?;

    let player_stats = report
        .stats
        .iter()
        .map(|(id, s)| {
            let record = s.to_record().into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            (id.clone(), record)
        })
        .collect();
    let growth_summary = report.hero_growth.as_ref().map(HeroMatchGrowth::summary);

    let response = PostMatchResponse {
        schema_version: API_SCHEMA_VERSION,
        home_outcome,
        player_stats,
        stats: report.stats.into_values().collect(),
        hero_growth: report.hero_growth,
        growth_summary,
        players,
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
