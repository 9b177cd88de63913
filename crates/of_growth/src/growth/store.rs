//! Player attribute store
//!
//! The growth engine only talks to persistent player data through
//! `PlayerStore`; `InMemoryPlayerStore` backs tests and the JSON API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};

use super::hero_action_tag::PlayerAttribute;
use super::xp_bucket::XpOverflow;

/// Attribute values keyed by attribute.
pub type AttributeMap = BTreeMap<PlayerAttribute, u8>;

pub trait PlayerStore {
    /// `None` when the player or attribute is unknown.
    fn get_attribute(&self, player_id: &str, attr: PlayerAttribute) -> Option<u8>;

    fn set_attribute(&mut self, player_id: &str, attr: PlayerAttribute, value: u8) -> Result<()>;

    /// Carried XP; empty for unknown players.
    fn get_overflow(&self, player_id: &str) -> XpOverflow;

    /// Replaces the whole overflow map.
    fn set_overflow(&mut self, player_id: &str, overflow: XpOverflow) -> Result<()>;

    /// Refresh whatever aggregate rating the record exposes.
    fn recompute_rating(&mut self, _player_id: &str) -> Result<()> {
        Ok(())
    }
}

/// Persistent growth-relevant part of a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub attributes: AttributeMap,
    #[serde(default)]
    pub xp_overflow: XpOverflow,
    /// Rounded mean of `attributes`
    #[serde(default)]
    pub overall: u8,
}

impl PlayerRecord {
    pub fn new(attributes: AttributeMap) -> Self {
        let mut record = Self { attributes, ..Self::default() };
        record.recompute_overall();
        record
    }

    pub fn recompute_overall(&mut self) {
        if self.attributes.is_empty() {
            self.overall = 0;
            return;
        }
        let sum: u32 = self.attributes.values().map(|v| *v as u32).sum();
        let mean = sum as f32 / self.attributes.len() as f32;
        self.overall = mean.round().clamp(0.0, u8::MAX as f32) as u8;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryPlayerStore {
    players: BTreeMap<String, PlayerRecord>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player_id: impl Into<String>, record: PlayerRecord) {
        self.players.insert(player_id.into(), record);
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.players.get(player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn record_mut(&mut self, player_id: &str) -> Result<&mut PlayerRecord> {
        self.players
            .get_mut(player_id)
            .ok_or_else(|| GrowthError::PlayerNotFound { player_id: player_id.to_string() })
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn get_attribute(&self, player_id: &str, attr: PlayerAttribute) -> Option<u8> {
        self.players.get(player_id)?.attributes.get(&attr).copied()
    }

    fn set_attribute(&mut self, player_id: &str, attr: PlayerAttribute, value: u8) -> Result<()> {
        self.record_mut(player_id)?.attributes.insert(attr, value);
        Ok(())
    }

    fn get_overflow(&self, player_id: &str) -> XpOverflow {
        self.players.get(player_id).map(|r| r.xp_overflow.clone()).unwrap_or_default()
    }

    fn set_overflow(&mut self, player_id: &str, overflow: XpOverflow) -> Result<()> {
        self.record_mut(player_id)?.xp_overflow = overflow;
        Ok(())
    }

    fn recompute_rating(&mut self, player_id: &str) -> Result<()> {
        self.record_mut(player_id)?.recompute_overall();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_rounded_mean() {
        let record = PlayerRecord::new(AttributeMap::from([
            (PlayerAttribute::Passing, 60),
            (PlayerAttribute::Vision, 61),
        ]));
        assert_eq!(record.overall, 61);
        assert_eq!(PlayerRecord::default().overall, 0);
    }

    #[test]
    fn test_unknown_player() {
        let mut store = InMemoryPlayerStore::new();
        assert_eq!(store.get_attribute("ghost", PlayerAttribute::Pace), None);
        assert!(store.get_overflow("ghost").is_empty());
        assert!(matches!(
            store.set_attribute("ghost", PlayerAttribute::Pace, 70),
            Err(GrowthError::PlayerNotFound { .. })
        ));
        assert!(store.set_overflow("ghost", XpOverflow::new()).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut store = InMemoryPlayerStore::new();
        store.insert("hero", PlayerRecord::default());

        store.set_attribute("hero", PlayerAttribute::Tackling, 51).unwrap();
        store
            .set_overflow("hero", XpOverflow::from([(PlayerAttribute::Tackling, 2.0)]))
            .unwrap();
        store.recompute_rating("hero").unwrap();

        assert_eq!(store.get_attribute("hero", PlayerAttribute::Tackling), Some(51));
        assert_eq!(store.get_overflow("hero")[&PlayerAttribute::Tackling], 2.0);
        assert_eq!(store.get("hero").unwrap().overall, 51);
    }

    #[test]
    fn test_store_json_shape() {
        let json = serde_json::json!({
            "hero": {
                "attributes": {"passing": 55, "long_shots": 40},
                "xp_overflow": {"passing": 3.5}
            }
        });
        let store: InMemoryPlayerStore = serde_json::from_value(json).unwrap();
        assert_eq!(store.get_attribute("hero", PlayerAttribute::LongShots), Some(40));
        assert_eq!(store.get_overflow("hero")[&PlayerAttribute::Passing], 3.5);
    }
}
