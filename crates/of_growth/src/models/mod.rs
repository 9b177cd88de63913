pub mod events;
pub mod position;
pub mod roster;

pub use events::{EventDetails, EventType, MatchEvent, NO_TRACK};
pub use position::{Position, PositionGroup};
pub use roster::{Roster, RosterEntry, RosterReader, TeamSide, TrackSlot, TEAM_SLOTS, TRACK_SLOTS};
