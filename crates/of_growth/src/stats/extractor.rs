//! Match event log → per-player box scores and ratings.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::config::RatingConfig;
use crate::error::{GrowthError, Result};
use crate::models::{EventType, MatchEvent, RosterReader, TeamSide, TrackSlot, TRACK_SLOTS};

use super::player_stats::PlayerMatchStats;
use super::rating::{rate, MatchOutcome};

/// Per-player stats keyed by player id.
pub type MatchStatsMap = BTreeMap<String, PlayerMatchStats>;

#[derive(Debug, Clone, Default)]
pub struct EventStatsExtractor {
    config: RatingConfig,
}

impl EventStatsExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Build one record per occupied slot and fold the events into them.
    ///
    /// `roster` is required; without it nothing can be attributed, so no
    /// partial result is returned.
    pub fn extract<R>(&self, events: &[MatchEvent], roster: Option<&R>) -> Result<MatchStatsMap>
    where
        R: RosterReader + ?Sized,
    {
        let roster = roster.ok_or(GrowthError::MissingRoster)?;

        let mut records: [Option<PlayerMatchStats>; TRACK_SLOTS] = Default::default();
        for slot in TrackSlot::all() {
            if let Some(entry) = roster.get_slot(slot) {
                records[slot.index()] = Some(PlayerMatchStats::new(slot, entry));
            }
        }

        for event in events {
            apply_event(&mut records, event);
        }

        let stats: MatchStatsMap = records
            .into_iter()
            .flatten()
            .map(|record| (record.player_id.clone(), record))
            .collect();
        debug!(players = stats.len(), events = events.len(), "extracted match stats");
        Ok(stats)
    }

    /// Rating for a single record.
    pub fn rate(&self, stats: &PlayerMatchStats, outcome: MatchOutcome) -> f32 {
        rate(stats, outcome, &self.config)
    }

    /// Write ratings into every record; away players get the flipped outcome.
    pub fn rate_all(&self, stats: &mut MatchStatsMap, home_outcome: MatchOutcome) {
        for record in stats.values_mut() {
            let outcome = match record.side {
                TeamSide::Home => home_outcome,
                TeamSide::Away => home_outcome.flipped(),
            };
            record.rating = self.rate(record, outcome);
        }
    }
}

fn apply_event(records: &mut [Option<PlayerMatchStats>; TRACK_SLOTS], event: &MatchEvent) {
    // Substitutions address the player going off through the target slot.
    if event.event_type == EventType::Substitution {
        match event.target().and_then(|slot| records[slot.index()].as_mut()) {
            Some(off) => off.minutes_played = event.minute,
            None => trace!(raw = event.target_track_id, "substitution without live record"),
        }
        return;
    }

    let Some(actor) = event.actor() else {
        trace!(event_type = ?event.event_type, raw = event.player_track_id, "event without valid actor");
        return;
    };
    let Some(stats) = records[actor.index()].as_mut() else {
        trace!(event_type = ?event.event_type, slot = %actor, "event actor slot is empty");
        return;
    };

    match event.event_type {
        EventType::Goal => {
            stats.goals += 1;
            stats.shots += 1;
            stats.shots_on_target += 1;
            if let Some(assist) = event.target().and_then(|slot| records[slot.index()].as_mut()) {
                assist.assists += 1;
                assist.key_passes += 1;
            }
        }
        EventType::OwnGoal => stats.goals -= 1,
        EventType::Shot | EventType::ShotOnTarget => {
            stats.shots += 1;
            stats.shots_on_target += 1;
        }
        EventType::ShotOffTarget => {
            stats.shots += 1;
            stats.shots_off_target += 1;
        }
        EventType::ShotBlocked => {
            stats.shots += 1;
            stats.shots_blocked += 1;
        }
        // The feed only emits completed passes.
        EventType::Pass => {
            stats.passes += 1;
            stats.passes_completed += 1;
        }
        EventType::KeyChance => stats.key_passes += 1,
        EventType::Tackle => stats.tackles += 1,
        EventType::Dribble => stats.dribbles += 1,
        EventType::Foul => stats.fouls += 1,
        EventType::YellowCard => stats.yellow_cards += 1,
        EventType::RedCard => stats.red_cards += 1,
        EventType::Save => stats.saves += 1,
        EventType::Corner => stats.corners += 1,
        EventType::Offside => stats.offsides += 1,
        EventType::Substitution
        | EventType::KickOff
        | EventType::HalfTime
        | EventType::FullTime
        | EventType::Other => {
            trace!(event_type = ?event.event_type, "event type not tracked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Roster, RosterEntry};

    fn roster() -> Roster {
        let mut roster = Roster::new();
        let positions = [
            Position::GK,
            Position::LB,
            Position::CB,
            Position::ST,
            Position::RB,
            Position::CM,
        ];
        for (idx, pos) in positions.iter().enumerate() {
            let slot = TrackSlot::new(idx).unwrap();
            roster.set(slot, RosterEntry::new(format!("home-{}", idx), *pos)).unwrap();
        }
        roster
            .set(TrackSlot::new(7).unwrap(), RosterEntry::new("home-7", Position::CAM))
            .unwrap();
        roster
            .set(TrackSlot::new(11).unwrap(), RosterEntry::new("away-11", Position::GK))
            .unwrap();
        roster
    }

    fn extract(events: &[MatchEvent]) -> MatchStatsMap {
        EventStatsExtractor::new().extract(events, Some(&roster())).unwrap()
    }

    #[test]
    fn test_missing_roster_is_error() {
        let result = EventStatsExtractor::new().extract::<Roster>(&[], None);
        assert!(matches!(result, Err(GrowthError::MissingRoster)));
    }

    #[test]
    fn test_records_only_for_occupied_slots() {
        let stats = extract(&[]);
        assert_eq!(stats.len(), 8);
        assert!(stats.contains_key("home-7"));
        assert!(!stats.values().any(|s| s.track_slot.index() == 6));
        assert_eq!(stats["away-11"].side, TeamSide::Away);
    }

    #[test]
    fn test_goal_with_assist() {
        let stats = extract(&[MatchEvent::goal(23, 3, Some(7))]);

        let scorer = &stats["home-3"];
        assert_eq!(scorer.goals, 1);
        assert_eq!(scorer.shots, 1);
        assert_eq!(scorer.shots_on_target, 1);
        assert_eq!(scorer.assists, 0);

        let assist = &stats["home-7"];
        assert_eq!(assist.assists, 1);
        assert_eq!(assist.key_passes, 1);
        assert_eq!(assist.goals, 0);
    }

    #[test]
    fn test_goal_with_empty_assist_slot() {
        let stats = extract(&[MatchEvent::goal(23, 3, Some(9))]);
        assert_eq!(stats["home-3"].goals, 1);
        assert!(stats.values().all(|s| s.assists == 0));
    }

    #[test]
    fn test_shot_family() {
        let events = vec![
            MatchEvent::new(1, EventType::Shot).with_actor(3),
            MatchEvent::new(2, EventType::ShotOnTarget).with_actor(3),
            MatchEvent::new(3, EventType::ShotOffTarget).with_actor(3),
            MatchEvent::new(4, EventType::ShotBlocked).with_actor(3),
        ];
        let s = &extract(&events)["home-3"];
        assert_eq!(s.shots, 4);
        assert_eq!(s.shots_on_target, 2);
        assert_eq!(s.shots_off_target, 1);
        assert_eq!(s.shots_blocked, 1);
    }

    #[test]
    fn test_simple_counters() {
        let kinds = [
            EventType::Pass,
            EventType::Pass,
            EventType::KeyChance,
            EventType::Tackle,
            EventType::Dribble,
            EventType::Foul,
            EventType::YellowCard,
            EventType::RedCard,
            EventType::Save,
            EventType::Corner,
            EventType::Offside,
        ];
        let events: Vec<_> =
            kinds.iter().map(|k| MatchEvent::new(10, *k).with_actor(5)).collect();
        let s = &extract(&events)["home-5"];
        assert_eq!(s.passes, 2);
        assert_eq!(s.passes_completed, 2);
        assert_eq!(s.key_passes, 1);
        assert_eq!(s.tackles, 1);
        assert_eq!(s.dribbles, 1);
        assert_eq!(s.fouls, 1);
        assert_eq!(s.yellow_cards, 1);
        assert_eq!(s.red_cards, 1);
        assert_eq!(s.saves, 1);
        assert_eq!(s.corners, 1);
        assert_eq!(s.offsides, 1);
        assert_eq!(s.interceptions, 0);
    }

    #[test]
    fn test_own_goal_goes_negative() {
        let events = vec![
            MatchEvent::new(30, EventType::OwnGoal).with_actor(2),
            MatchEvent::new(60, EventType::OwnGoal).with_actor(2),
        ];
        assert_eq!(extract(&events)["home-2"].goals, -2);
    }

    #[test]
    fn test_last_substitution_wins() {
        let events = vec![
            MatchEvent::substitution(55, 8, 4),
            MatchEvent::substitution(70, 9, 4),
        ];
        let stats = extract(&events);
        assert_eq!(stats["home-4"].minutes_played, 70);
        assert_eq!(stats["home-5"].minutes_played, 90);
    }

    #[test]
    fn test_substitution_does_not_touch_incoming_player() {
        let stats = extract(&[MatchEvent::substitution(60, 7, 4)]);
        assert_eq!(stats["home-7"].minutes_played, 90);
        assert_eq!(stats["home-4"].minutes_played, 60);
    }

    #[test]
    fn test_bad_slots_are_skipped() {
        let events = vec![
            MatchEvent::new(1, EventType::Pass).with_actor(-1),
            MatchEvent::new(2, EventType::Pass).with_actor(22),
            MatchEvent::new(3, EventType::Pass).with_actor(100),
            MatchEvent::new(4, EventType::Pass).with_actor(9),
            MatchEvent::new(5, EventType::KickOff),
            MatchEvent::new(6, EventType::Other).with_actor(3),
            MatchEvent::new(7, EventType::Pass).with_actor(3),
        ];
        let stats = extract(&events);
        let total_passes: u32 = stats.values().map(|s| s.passes).sum();
        assert_eq!(total_passes, 1);
        assert_eq!(stats["home-3"].passes, 1);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let events = vec![
            MatchEvent::goal(10, 3, Some(5)),
            MatchEvent::new(20, EventType::Tackle).with_actor(2),
            MatchEvent::substitution(70, 8, 3),
        ];
        assert_eq!(extract(&events), extract(&events));
    }

    #[test]
    fn test_rate_all_uses_side_outcome() {
        let extractor = EventStatsExtractor::new();
        let mut stats = extractor.extract(&[], Some(&roster())).unwrap();
        extractor.rate_all(&mut stats, MatchOutcome::Win);

        assert!((stats["home-5"].rating - 6.5).abs() < 1e-5);
        assert!((stats["away-11"].rating - 5.7).abs() < 1e-5);
    }
}
