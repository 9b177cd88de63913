//! Hero Action Tag System
//!
//! 경기 이벤트를 스탯 성장에 연결하는 태그 시스템
//!
//! ## 핵심 개념
//! - HeroActionTag: 액션 유형 (패스, 드리블, 슈팅, 수비)
//! - PlayerAttribute: XP를 받는 스탯
//! - affected_attributes(): 액션이 영향 주는 스탯과 비중

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// 액션 유형
///
/// 각 태그는 특정 스탯 조합에 XP를 부여함
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum HeroActionTag {
    // ========== 패스 계열 ==========
    /// 안전한 패스 (횡패스, 후방 패스)
    SafePass,
    /// 전진 패스
    ForwardPass,
    /// 스루 패스 (수비 라인 뚫기)
    ThroughPass,
    /// 롱패스 / 크로스
    LobPass,

    // ========== 드리블 계열 ==========
    /// 공간으로 운반
    SafeDribble,
    /// 1v1 돌파
    DribblePastOpponent,

    // ========== 슈팅 계열 ==========
    BoxShot,
    LongShot,
    HeaderShot,

    // ========== 수비 계열 ==========
    Interception,
    Tackle,
    /// 공중볼 경합 승리
    AerialDuel,
}

/// XP를 받는 스탯
///
/// 저장소 키는 snake_case 이름 (`as_str`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAttribute {
    // 테크니컬
    Passing,
    Dribbling,
    Finishing,
    LongShots,
    Technique,
    FirstTouch,

    // 멘탈
    Vision,
    Composure,
    Decisions,
    Anticipation,
    Positioning,
    Flair,

    // 피지컬
    Pace,
    Agility,
    Strength,
    Jumping,

    // 수비
    Tackling,
    Aggression,
    Marking,
}

impl HeroActionTag {
    /// 이 액션이 영향 주는 스탯들 (비중 합계 1.0)
    pub fn affected_attributes(&self) -> &'static [(PlayerAttribute, f32)] {
        use PlayerAttribute::*;

        match self {
            HeroActionTag::SafePass => &[(Passing, 0.6), (Composure, 0.4)],
            HeroActionTag::ForwardPass => &[(Passing, 0.5), (Vision, 0.3), (Decisions, 0.2)],
            HeroActionTag::ThroughPass => &[(Passing, 0.4), (Vision, 0.4), (Decisions, 0.2)],
            HeroActionTag::LobPass => &[(Passing, 0.5), (Technique, 0.3), (Vision, 0.2)],

            HeroActionTag::SafeDribble => &[(Dribbling, 0.5), (Composure, 0.3), (FirstTouch, 0.2)],
            HeroActionTag::DribblePastOpponent => {
                &[(Dribbling, 0.5), (Agility, 0.3), (Flair, 0.2)]
            }

            HeroActionTag::BoxShot => &[(Finishing, 0.6), (Composure, 0.3), (Technique, 0.1)],
            HeroActionTag::LongShot => &[(LongShots, 0.5), (Technique, 0.3), (Composure, 0.2)],
            HeroActionTag::HeaderShot => &[(Finishing, 0.4), (Jumping, 0.4), (Strength, 0.2)],

            HeroActionTag::Interception => {
                &[(Anticipation, 0.5), (Positioning, 0.3), (Decisions, 0.2)]
            }
            HeroActionTag::Tackle => &[(Tackling, 0.6), (Strength, 0.2), (Aggression, 0.2)],
            HeroActionTag::AerialDuel => &[(Jumping, 0.5), (Strength, 0.3), (Marking, 0.2)],
        }
    }

    /// 기본 XP 값 (어려운 액션일수록 높음)
    pub fn base_xp(&self) -> f32 {
        match self {
            HeroActionTag::SafePass => 1.0,
            HeroActionTag::ForwardPass => 2.0,
            HeroActionTag::ThroughPass => 5.0,
            HeroActionTag::LobPass => 3.0,
            HeroActionTag::SafeDribble => 2.0,
            HeroActionTag::DribblePastOpponent => 6.0,
            HeroActionTag::BoxShot => 4.0,
            HeroActionTag::LongShot => 3.0,
            HeroActionTag::HeaderShot => 4.0,
            HeroActionTag::Interception => 4.0,
            HeroActionTag::Tackle => 3.0,
            HeroActionTag::AerialDuel => 3.0,
        }
    }
}

impl PlayerAttribute {
    pub const ALL: [PlayerAttribute; 19] = [
        PlayerAttribute::Passing,
        PlayerAttribute::Dribbling,
        PlayerAttribute::Finishing,
        PlayerAttribute::LongShots,
        PlayerAttribute::Technique,
        PlayerAttribute::FirstTouch,
        PlayerAttribute::Vision,
        PlayerAttribute::Composure,
        PlayerAttribute::Decisions,
        PlayerAttribute::Anticipation,
        PlayerAttribute::Positioning,
        PlayerAttribute::Flair,
        PlayerAttribute::Pace,
        PlayerAttribute::Agility,
        PlayerAttribute::Strength,
        PlayerAttribute::Jumping,
        PlayerAttribute::Tackling,
        PlayerAttribute::Aggression,
        PlayerAttribute::Marking,
    ];

    /// 저장소 키
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAttribute::Passing => "passing",
            PlayerAttribute::Dribbling => "dribbling",
            PlayerAttribute::Finishing => "finishing",
            PlayerAttribute::LongShots => "long_shots",
            PlayerAttribute::Technique => "technique",
            PlayerAttribute::FirstTouch => "first_touch",
            PlayerAttribute::Vision => "vision",
            PlayerAttribute::Composure => "composure",
            PlayerAttribute::Decisions => "decisions",
            PlayerAttribute::Anticipation => "anticipation",
            PlayerAttribute::Positioning => "positioning",
            PlayerAttribute::Flair => "flair",
            PlayerAttribute::Pace => "pace",
            PlayerAttribute::Agility => "agility",
            PlayerAttribute::Strength => "strength",
            PlayerAttribute::Jumping => "jumping",
            PlayerAttribute::Tackling => "tackling",
            PlayerAttribute::Aggression => "aggression",
            PlayerAttribute::Marking => "marking",
        }
    }

    /// UI 표시용 이름 (예: "Long Shots")
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerAttribute::LongShots => "Long Shots",
            PlayerAttribute::FirstTouch => "First Touch",
            PlayerAttribute::Passing => "Passing",
            PlayerAttribute::Dribbling => "Dribbling",
            PlayerAttribute::Finishing => "Finishing",
            PlayerAttribute::Technique => "Technique",
            PlayerAttribute::Vision => "Vision",
            PlayerAttribute::Composure => "Composure",
            PlayerAttribute::Decisions => "Decisions",
            PlayerAttribute::Anticipation => "Anticipation",
            PlayerAttribute::Positioning => "Positioning",
            PlayerAttribute::Flair => "Flair",
            PlayerAttribute::Pace => "Pace",
            PlayerAttribute::Agility => "Agility",
            PlayerAttribute::Strength => "Strength",
            PlayerAttribute::Jumping => "Jumping",
            PlayerAttribute::Tackling => "Tackling",
            PlayerAttribute::Aggression => "Aggression",
            PlayerAttribute::Marking => "Marking",
        }
    }
}

impl FromStr for PlayerAttribute {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        PlayerAttribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == key)
            .ok_or_else(|| GrowthError::InvalidConfig(format!("unknown attribute: {}", s)))
    }
}

impl fmt::Display for PlayerAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// XP 획득 이벤트 (버킷 히스토리용)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroXpEvent {
    pub tag: HeroActionTag,
    pub success: bool,
    /// 경기 시간 (분)
    pub minute: u8,
    /// 분배 전 총 XP
    pub xp: f32,
}
