use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Position, RosterEntry, TeamSide, TrackSlot};

/// Minutes credited to a player nobody substituted off.
pub const FULL_MATCH_MINUTES: u8 = 90;

/// Box score of one player for one match.
///
/// `goals` goes negative for own goals; the rating turns each negative
/// point into a fixed penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchStats {
    pub player_id: String,
    pub track_slot: TrackSlot,
    pub side: TeamSide,
    pub position: Position,

    pub goals: i32,
    pub assists: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub shots_off_target: u32,
    pub shots_blocked: u32,
    pub passes: u32,
    pub passes_completed: u32,
    pub key_passes: u32,
    pub tackles: u32,
    pub interceptions: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub dribbles: u32,
    pub saves: u32,
    pub corners: u32,
    pub offsides: u32,

    pub minutes_played: u8,
    /// Match rating (0.0 ~ 10.0), filled in after extraction
    pub rating: f32,
}

impl PlayerMatchStats {
    pub fn new(track_slot: TrackSlot, entry: &RosterEntry) -> Self {
        Self {
            player_id: entry.player_id.clone(),
            track_slot,
            side: track_slot.side(),
            position: entry.position,
            goals: 0,
            assists: 0,
            shots: 0,
            shots_on_target: 0,
            shots_off_target: 0,
            shots_blocked: 0,
            passes: 0,
            passes_completed: 0,
            key_passes: 0,
            tackles: 0,
            interceptions: 0,
            fouls: 0,
            yellow_cards: 0,
            red_cards: 0,
            dribbles: 0,
            saves: 0,
            corners: 0,
            offsides: 0,
            minutes_played: FULL_MATCH_MINUTES,
            rating: 0.0,
        }
    }

    /// Own goals encoded in a negative `goals` count.
    pub fn own_goals(&self) -> u32 {
        self.goals.min(0).unsigned_abs()
    }

    pub fn pass_accuracy(&self) -> f32 {
        if self.passes == 0 {
            0.0
        } else {
            self.passes_completed as f32 / self.passes as f32 * 100.0
        }
    }

    /// Flattened numeric view for reports and UI panels.
    pub fn to_record(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("track_slot", self.track_slot.index() as f64),
            ("goals", self.goals as f64),
            ("assists", self.assists as f64),
            ("shots", self.shots as f64),
            ("shots_on_target", self.shots_on_target as f64),
            ("shots_off_target", self.shots_off_target as f64),
            ("shots_blocked", self.shots_blocked as f64),
            ("passes", self.passes as f64),
            ("passes_completed", self.passes_completed as f64),
            ("pass_accuracy", self.pass_accuracy() as f64),
            ("key_passes", self.key_passes as f64),
            ("tackles", self.tackles as f64),
            ("interceptions", self.interceptions as f64),
            ("fouls", self.fouls as f64),
            ("yellow_cards", self.yellow_cards as f64),
            ("red_cards", self.red_cards as f64),
            ("dribbles", self.dribbles as f64),
            ("saves", self.saves as f64),
            ("corners", self.corners as f64),
            ("offsides", self.offsides as f64),
            ("minutes_played", self.minutes_played as f64),
            ("rating", self.rating as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PlayerMatchStats {
        let entry = RosterEntry::new("p-9", Position::ST);
        PlayerMatchStats::new(TrackSlot::new(13).unwrap(), &entry)
    }

    #[test]
    fn test_new_record_defaults() {
        let s = stats();
        assert_eq!(s.player_id, "p-9");
        assert_eq!(s.side, TeamSide::Away);
        assert_eq!(s.minutes_played, FULL_MATCH_MINUTES);
        assert_eq!(s.goals, 0);
        assert_eq!(s.rating, 0.0);
    }

    #[test]
    fn test_own_goals_from_negative_goals() {
        let mut s = stats();
        assert_eq!(s.own_goals(), 0);
        s.goals = -2;
        assert_eq!(s.own_goals(), 2);
        s.goals = 1;
        assert_eq!(s.own_goals(), 0);
    }

    #[test]
    fn test_to_record() {
        let mut s = stats();
        s.passes = 4;
        s.passes_completed = 3;
        s.goals = -1;

        let record = s.to_record();
        assert_eq!(record["goals"], -1.0);
        assert_eq!(record["track_slot"], 13.0);
        assert!((record["pass_accuracy"] - 75.0).abs() < 0.001);
        assert_eq!(record["minutes_played"], 90.0);
    }
}
