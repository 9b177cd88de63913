//! Post-match pipeline
//!
//! extract → rate → accumulate → grow → apply, once per match. The store
//! is only written after every read-only stage has succeeded. A hero the
//! store does not know gets no growth; the box scores are still returned.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GrowthConfig;
use crate::error::Result;
use crate::growth::{GrowthEngine, HeroMatchGrowth, PlayerAttribute, PlayerStore};
use crate::models::{MatchEvent, RosterReader};
use crate::stats::{EventStatsExtractor, MatchOutcome, MatchStatsMap};

/// The career player whose growth is tracked this match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContext {
    pub player_id: String,
    /// Attributes trained since the last match
    #[serde(default)]
    pub trained_attributes: Vec<PlayerAttribute>,
    #[serde(default)]
    pub training_bonus: f32,
}

impl HeroContext {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self { player_id: player_id.into(), trained_attributes: Vec::new(), training_bonus: 0.0 }
    }

    pub fn with_training(mut self, attrs: Vec<PlayerAttribute>, bonus: f32) -> Self {
        self.trained_attributes = attrs;
        self.training_bonus = bonus;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMatchReport {
    pub stats: MatchStatsMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_growth: Option<HeroMatchGrowth>,
}

impl PostMatchReport {
    pub fn hero_rating(&self, hero_id: &str) -> Option<f32> {
        self.stats.get(hero_id).map(|s| s.rating)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostMatchPipeline {
    extractor: EventStatsExtractor,
    growth: GrowthEngine,
}

impl PostMatchPipeline {
    pub fn new(config: GrowthConfig) -> Self {
        Self {
            extractor: EventStatsExtractor::with_config(config.rating),
            growth: GrowthEngine::with_config(config.xp),
        }
    }

    pub fn extractor(&self) -> &EventStatsExtractor {
        &self.extractor
    }

    pub fn growth(&self) -> &GrowthEngine {
        &self.growth
    }

    pub fn run<R, S>(
        &self,
        events: &[MatchEvent],
        roster: Option<&R>,
        home_outcome: MatchOutcome,
        hero: Option<&HeroContext>,
        store: &mut S,
    ) -> Result<PostMatchReport>
    where
        R: RosterReader + ?Sized,
        S: PlayerStore + ?Sized,
    {
        let mut stats = self.extractor.extract(events, roster)?;
        self.extractor.rate_all(&mut stats, home_outcome);

        let hero_growth = match (hero, roster) {
            (Some(hero), Some(roster)) => {
                let trained = (!hero.trained_attributes.is_empty())
                    .then_some((hero.trained_attributes.as_slice(), hero.training_bonus));
                match self.growth.run(events, &hero.player_id, roster, store, trained) {
                    Ok(growth) => Some(growth),
                    // 스탯은 그대로 반환, 성장만 건너뜀
                    Err(err) if err.is_recoverable() => {
                        warn!(player_id = %hero.player_id, %err, "hero growth skipped");
                        None
                    }
                    Err(err) => return Err(err),
                }
            }
            _ => None,
        };

        debug!(players = stats.len(), hero = hero_growth.is_some(), "post-match pipeline done");
        Ok(PostMatchReport { stats, hero_growth })
    }
}
