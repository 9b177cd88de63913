//! Match rating (0.0 ~ 10.0)
//!
//! | 항목 | 가중치 |
//! |------|--------|
//! | 기본 | 6.0 |
//! | 결과 | 승 +0.5 / 무 0 / 패 -0.3 |
//! | 골 / 어시스트 | 1.5 / 1.0 × 포지션 배율 |
//! | 유효슈팅 | 0.1 |
//! | 패스 성공 | 0.01 × 포지션 배율 |
//! | 태클 | 0.2 × 포지션 배율 |
//! | 파울 / 경고 / 퇴장 | -0.1 / -0.5 / -2.0 |
//! | 자책골 | -3.0 |
//!
//! Goalkeepers only get the base, the result bonus and 0.3 per save.

use serde::{Deserialize, Serialize};

use crate::config::RatingConfig;
use crate::models::{PositionGroup, TeamSide};

use super::player_stats::PlayerMatchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Outcome for `side` given the final score.
    pub fn from_score(home_goals: u8, away_goals: u8, side: TeamSide) -> Self {
        let (own, other) = match side {
            TeamSide::Home => (home_goals, away_goals),
            TeamSide::Away => (away_goals, home_goals),
        };
        match own.cmp(&other) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// The other team's outcome.
    pub fn flipped(self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Draw => MatchOutcome::Draw,
            MatchOutcome::Loss => MatchOutcome::Win,
        }
    }

    pub fn bonus(self, config: &RatingConfig) -> f32 {
        match self {
            MatchOutcome::Win => config.win_bonus,
            MatchOutcome::Draw => config.draw_bonus,
            MatchOutcome::Loss => config.loss_bonus,
        }
    }
}

/// Per-position emphasis applied on top of the rating weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMultipliers {
    pub goals: f32,
    pub assists: f32,
    pub passes: f32,
    pub tackles: f32,
}

impl PositionMultipliers {
    pub const NEUTRAL: Self = Self { goals: 1.0, assists: 1.0, passes: 1.0, tackles: 1.0 };
    pub const FORWARD: Self = Self { goals: 2.0, assists: 1.5, passes: 1.0, tackles: 0.5 };
    pub const MIDFIELDER: Self = Self { goals: 1.0, assists: 1.0, passes: 1.5, tackles: 1.0 };
    pub const DEFENDER: Self = Self { goals: 1.0, assists: 0.8, passes: 1.0, tackles: 2.0 };

    pub fn for_group(group: PositionGroup) -> Self {
        match group {
            PositionGroup::Forward => Self::FORWARD,
            PositionGroup::Midfielder => Self::MIDFIELDER,
            PositionGroup::Defender => Self::DEFENDER,
            PositionGroup::Goalkeeper | PositionGroup::Other => Self::NEUTRAL,
        }
    }
}

/// Rate one player's match. Always within `[config.min, config.max]`.
pub fn rate(stats: &PlayerMatchStats, outcome: MatchOutcome, config: &RatingConfig) -> f32 {
    let group = stats.position.group();
    let mut rating = config.base + outcome.bonus(config);

    if group == PositionGroup::Goalkeeper {
        rating += config.save * stats.saves as f32;
        return rating.clamp(config.min, config.max);
    }

    let mult = PositionMultipliers::for_group(group);
    rating += config.goal * stats.goals as f32 * mult.goals;
    rating += config.assist * stats.assists as f32 * mult.assists;
    rating += config.shot_on_target * stats.shots_on_target as f32;
    rating += config.pass_completed * stats.passes_completed as f32 * mult.passes;
    rating += config.tackle * stats.tackles as f32 * mult.tackles;
    rating += config.foul * stats.fouls as f32;
    rating += config.yellow_card * stats.yellow_cards as f32;
    rating += config.red_card * stats.red_cards as f32;
    rating += config.own_goal * stats.own_goals() as f32;

    rating.clamp(config.min, config.max)
}
