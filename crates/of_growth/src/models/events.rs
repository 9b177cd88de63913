use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::roster::TrackSlot;

/// Raw slot value for neutral events (no actor / no target).
pub const NO_TRACK: i32 = -1;

fn no_track() -> i32 {
    NO_TRACK
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u8,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// track_id of the acting player (0..21), `-1` for neutral events.
    #[serde(default = "no_track")]
    pub player_track_id: i32,
    /// track_id of the target: assist provider for goals, player going off for
    /// substitutions, `-1` otherwise.
    #[serde(default = "no_track")]
    pub target_track_id: i32,
    #[serde(default, skip_serializing_if = "EventDetails::is_empty")]
    pub details: EventDetails,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    KickOff,
    Goal,
    /// Scored into the actor's own net
    OwnGoal,
    Shot,
    ShotOnTarget,
    ShotOffTarget,
    ShotBlocked,
    Pass,
    KeyChance,
    Tackle,
    Dribble,
    Foul,
    YellowCard,
    RedCard,
    Save,
    Corner,
    Offside,
    Substitution,
    HalfTime,
    FullTime,
    /// Anything the stats and growth pipeline does not track
    #[serde(other)]
    Other,
}

impl EventType {
    pub fn is_shot(&self) -> bool {
        matches!(
            self,
            EventType::Goal
                | EventType::Shot
                | EventType::ShotOnTarget
                | EventType::ShotOffTarget
                | EventType::ShotBlocked
        )
    }
}

/// Open auxiliary fields attached to an event (ball position, header flag, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EventDetails(BTreeMap<String, Value>);

impl EventDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// `true` only when the key holds a JSON `true`.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

impl MatchEvent {
    pub fn new(minute: u8, event_type: EventType) -> Self {
        Self {
            minute,
            event_type,
            player_track_id: NO_TRACK,
            target_track_id: NO_TRACK,
            details: EventDetails::default(),
        }
    }

    pub fn with_actor(mut self, track_id: i32) -> Self {
        self.player_track_id = track_id;
        self
    }

    pub fn with_target(mut self, track_id: i32) -> Self {
        self.target_track_id = track_id;
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key, value);
        self
    }

    /// Goal by `scorer`, optionally assisted by `assist`.
    pub fn goal(minute: u8, scorer: i32, assist: Option<i32>) -> Self {
        Self::new(minute, EventType::Goal)
            .with_actor(scorer)
            .with_target(assist.unwrap_or(NO_TRACK))
    }

    /// `player_in` replaces `player_out`.
    pub fn substitution(minute: u8, player_in: i32, player_out: i32) -> Self {
        Self::new(minute, EventType::Substitution).with_actor(player_in).with_target(player_out)
    }

    /// Acting slot, if it addresses a valid track slot.
    pub fn actor(&self) -> Option<TrackSlot> {
        TrackSlot::from_raw(self.player_track_id)
    }

    /// Target slot, if it addresses a valid track slot.
    pub fn target(&self) -> Option<TrackSlot> {
        TrackSlot::from_raw(self.target_track_id)
    }

    /// Whether `slot` performed or received this event.
    pub fn involves(&self, slot: TrackSlot) -> bool {
        self.actor() == Some(slot) || self.target() == Some(slot)
    }
}
