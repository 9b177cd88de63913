//! Hero growth stages
//!
//! 1. `accumulate`: event log → XP bucket (hero only)
//! 2. `grow`: bucket + current stats + carried XP → `HeroMatchGrowth`
//! 3. `apply`: write gains and overflow to the player store
//!
//! Stages 1 and 2 are pure; only `apply` touches the store.

use tracing::{debug, info, trace};

use crate::config::XpConfig;
use crate::error::Result;
use crate::models::{MatchEvent, RosterReader};

use super::classify::{action_tag, is_success};
use super::hero_action_tag::PlayerAttribute;
use super::match_growth::HeroMatchGrowth;
use super::store::{AttributeMap, PlayerStore};
use super::xp_bucket::{HeroXpBucket, XpOverflow};

#[derive(Debug, Clone, Default)]
pub struct GrowthEngine {
    config: XpConfig,
}

impl GrowthEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: XpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &XpConfig {
        &self.config
    }

    /// Collect XP for `hero_id` from every event they performed or received.
    ///
    /// A hero missing from the roster did not play: the bucket is empty.
    pub fn accumulate<R>(&self, events: &[MatchEvent], hero_id: &str, roster: &R) -> HeroXpBucket
    where
        R: RosterReader + ?Sized,
    {
        let mut bucket = HeroXpBucket::new();
        let Some(hero_slot) = roster.find_slot(hero_id) else {
            debug!(hero_id, "hero not on roster, no XP");
            return bucket;
        };

        for event in events.iter().filter(|e| e.involves(hero_slot)) {
            match action_tag(event) {
                Some(tag) => {
                    let success = is_success(event.event_type);
                    bucket.add_action(tag, success, event.minute, &self.config);
                }
                None => trace!(event_type = ?event.event_type, "no action tag"),
            }
        }

        debug!(
            hero_id,
            slot = %hero_slot,
            events = bucket.total_events(),
            total_xp = bucket.total_xp(),
            "accumulated hero XP"
        );
        bucket
    }

    /// Turn accumulated XP into attribute points.
    pub fn grow(
        &self,
        bucket: &HeroXpBucket,
        current: &AttributeMap,
        previous_overflow: &XpOverflow,
    ) -> HeroMatchGrowth {
        HeroMatchGrowth::from_bucket(
            bucket,
            previous_overflow,
            |attr| current.get(&attr).copied(),
            &self.config,
        )
    }

    /// Current store values for every attribute the bucket or overflow touches.
    pub fn current_attributes<S>(
        &self,
        store: &S,
        player_id: &str,
        bucket: &HeroXpBucket,
        overflow: &XpOverflow,
    ) -> AttributeMap
    where
        S: PlayerStore + ?Sized,
    {
        bucket
            .iter()
            .map(|(attr, _)| attr)
            .chain(overflow.keys().copied())
            .filter_map(|attr| store.get_attribute(player_id, attr).map(|v| (attr, v)))
            .collect()
    }

    /// Route a growth result into the store. No further calculation.
    pub fn apply<S>(&self, growth: &HeroMatchGrowth, player_id: &str, store: &mut S) -> Result<()>
    where
        S: PlayerStore + ?Sized,
    {
        for (attr, gain) in &growth.stat_gains {
            let current = self.clamp_attribute(
                store.get_attribute(player_id, *attr).unwrap_or(self.config.default_attribute),
            );
            let updated = self.clamp_attribute(current.saturating_add(*gain));
            store.set_attribute(player_id, *attr, updated)?;
        }
        store.set_overflow(player_id, growth.xp_overflow.clone())?;
        store.recompute_rating(player_id)?;

        info!(
            player_id,
            gains = growth.total_gains(),
            total_xp = growth.total_xp_earned,
            "applied match growth"
        );
        Ok(())
    }

    /// Stages 1-3 for one hero, reading current values and carried XP from
    /// the store. `trained` optionally boosts recently trained attributes.
    pub fn run<R, S>(
        &self,
        events: &[MatchEvent],
        hero_id: &str,
        roster: &R,
        store: &mut S,
        trained: Option<(&[PlayerAttribute], f32)>,
    ) -> Result<HeroMatchGrowth>
    where
        R: RosterReader + ?Sized,
        S: PlayerStore + ?Sized,
    {
        let mut bucket = self.accumulate(events, hero_id, roster);
        if let Some((attrs, bonus_rate)) = trained {
            bucket.apply_training_synergy(attrs, bonus_rate);
        }

        let previous = store.get_overflow(hero_id);
        let current = self.current_attributes(&*store, hero_id, &bucket, &previous);
        let growth = self.grow(&bucket, &current, &previous);
        self.apply(&growth, hero_id, store)?;
        Ok(growth)
    }

    fn clamp_attribute(&self, value: u8) -> u8 {
        value.clamp(self.config.attribute_min, self.config.attribute_max)
    }
}
