//! Match event → growth action tag.
//!
//! The split is by event type only. Passes are all treated as forward
//! passes and shots are split box/long by outcome type, not by ball
//! position. `is_header` in the event details turns any shot into a
//! header.

use crate::models::{EventType, MatchEvent};

use super::hero_action_tag::HeroActionTag;

/// Details key marking a headed attempt.
pub const HEADER_DETAIL: &str = "is_header";

/// Action tag for an event, or `None` when it earns no XP.
pub fn action_tag(event: &MatchEvent) -> Option<HeroActionTag> {
    if event.event_type.is_shot() && event.details.flag(HEADER_DETAIL) {
        return Some(HeroActionTag::HeaderShot);
    }
    tag_for_type(event.event_type)
}

/// Type-only lookup table.
pub fn tag_for_type(event_type: EventType) -> Option<HeroActionTag> {
    match event_type {
        EventType::Pass => Some(HeroActionTag::ForwardPass),
        EventType::KeyChance => Some(HeroActionTag::ThroughPass),
        EventType::Corner => Some(HeroActionTag::LobPass),
        EventType::Dribble => Some(HeroActionTag::DribblePastOpponent),
        EventType::Goal | EventType::Shot | EventType::ShotOnTarget => Some(HeroActionTag::BoxShot),
        EventType::ShotOffTarget | EventType::ShotBlocked => Some(HeroActionTag::LongShot),
        EventType::Tackle => Some(HeroActionTag::Tackle),
        EventType::Save => Some(HeroActionTag::Interception),
        EventType::OwnGoal
        | EventType::Foul
        | EventType::YellowCard
        | EventType::RedCard
        | EventType::Offside
        | EventType::Substitution
        | EventType::KickOff
        | EventType::HalfTime
        | EventType::FullTime
        | EventType::Other => None,
    }
}

/// Missed shots are failures; everything else counts as a success.
pub fn is_success(event_type: EventType) -> bool {
    !matches!(event_type, EventType::ShotOffTarget | EventType::ShotBlocked)
}
