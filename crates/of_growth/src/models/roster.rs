//! Match roster: 22 fixed track slots (0-10 home, 11-21 away).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};

use super::position::Position;

/// Number of on-pitch track slots per match.
pub const TRACK_SLOTS: usize = 22;
/// Slots per team.
pub const TEAM_SLOTS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct TrackSlot(u8);

impl TrackSlot {
    pub const fn new(index: usize) -> Option<Self> {
        if index < TRACK_SLOTS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Raw event slot value; anything outside 0..=21 (including `-1`) is `None`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw).ok().and_then(Self::new)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn side(self) -> TeamSide {
        TeamSide::from_track_id(self.0 as usize)
    }

    pub fn all() -> impl Iterator<Item = TrackSlot> {
        (0..TRACK_SLOTS as u8).map(TrackSlot)
    }
}

impl TryFrom<i32> for TrackSlot {
    type Error = String;

    fn try_from(raw: i32) -> std::result::Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| format!("track slot out of range: {}", raw))
    }
}

impl From<TrackSlot> for i32 {
    fn from(slot: TrackSlot) -> Self {
        slot.0 as i32
    }
}

impl fmt::Display for TrackSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    /// track_id에서 팀 판별 (0-10: Home, 11-21: Away)
    #[inline]
    pub const fn from_track_id(track_id: usize) -> Self {
        if track_id < TEAM_SLOTS {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }

}

/// Player occupying a slot for the duration of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: String,
    #[serde(default)]
    pub position: Position,
}

impl RosterEntry {
    pub fn new(player_id: impl Into<String>, position: Position) -> Self {
        Self { player_id: player_id.into(), position }
    }
}

/// Read access to a match roster.
///
/// Must answer for all 22 slots, returning `None` for empty ones.
pub trait RosterReader {
    fn get_slot(&self, slot: TrackSlot) -> Option<&RosterEntry>;

    /// Current slot of `player_id`, if they are on this roster.
    fn find_slot(&self, player_id: &str) -> Option<TrackSlot> {
        TrackSlot::all()
            .find(|slot| self.get_slot(*slot).is_some_and(|entry| entry.player_id == player_id))
    }
}

/// Serialized as a slot-ordered list (`null` for an empty slot). Deserializing
/// goes through `from_entries`, so the one-slot-per-player rule always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<RosterEntry>>", into = "Vec<Option<RosterEntry>>")]
pub struct Roster {
    slots: [Option<RosterEntry>; TRACK_SLOTS],
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries listed in slot order; `None` leaves a slot empty.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<RosterEntry>>,
    {
        let mut roster = Self::new();
        for (idx, entry) in entries.into_iter().enumerate() {
            let slot = TrackSlot::new(idx).ok_or_else(|| GrowthError::InvalidRoster {
                reason: format!("more than {} slots", TRACK_SLOTS),
            })?;
            if let Some(entry) = entry {
                roster.set(slot, entry)?;
            }
        }
        Ok(roster)
    }

    /// Place `entry` in `slot`, replacing whoever was there.
    ///
    /// A player id may only occupy one slot.
    pub fn set(&mut self, slot: TrackSlot, entry: RosterEntry) -> Result<()> {
        if let Some(existing) = self.find_slot(&entry.player_id) {
            if existing != slot {
                return Err(GrowthError::InvalidRoster {
                    reason: format!(
                        "player {} already in slot {}, cannot also take slot {}",
                        entry.player_id, existing, slot
                    ),
                });
            }
        }
        self.slots[slot.index()] = Some(entry);
        Ok(())
    }

    /// Occupied slots in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (TrackSlot, &RosterEntry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| Some((TrackSlot(idx as u8), entry.as_ref()?)))
    }

    pub fn len(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<Vec<Option<RosterEntry>>> for Roster {
    type Error = GrowthError;

    fn try_from(entries: Vec<Option<RosterEntry>>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<Roster> for Vec<Option<RosterEntry>> {
    fn from(roster: Roster) -> Self {
        roster.slots.into_iter().collect()
    }
}

impl RosterReader for Roster {
    fn get_slot(&self, slot: TrackSlot) -> Option<&RosterEntry> {
        self.slots[slot.index()].as_ref()
    }
}
