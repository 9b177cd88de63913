//! Hero Growth System
//!
//! 경기 이벤트를 선수 스탯 성장에 연결
//!
//! ## 모듈 구조
//! - `hero_action_tag`: HeroActionTag, PlayerAttribute, HeroXpEvent 정의
//! - `classify`: MatchEvent → HeroActionTag
//! - `xp_bucket`: 경기 중 XP 누적
//! - `match_growth`: XP → 스탯 변환
//! - `store`: 선수 스탯 저장소 인터페이스
//! - `engine`: accumulate → grow → apply
//!
//! ## 사용 흐름
//! 1. 경기 종료 → GrowthEngine::accumulate()
//! 2. GrowthEngine::grow() (이전 경기 이월 XP 합산)
//! 3. GrowthEngine::apply() → PlayerStore 갱신

pub mod classify;
pub mod engine;
pub mod hero_action_tag;
pub mod match_growth;
pub mod store;
pub mod xp_bucket;

pub use classify::{action_tag, is_success, tag_for_type};
pub use engine::GrowthEngine;
pub use hero_action_tag::{HeroActionTag, HeroXpEvent, PlayerAttribute};
pub use match_growth::{growth_threshold, HeroMatchGrowth};
pub use store::{AttributeMap, InMemoryPlayerStore, PlayerRecord, PlayerStore};
pub use xp_bucket::{calculate_xp, HeroXpBucket, XpOverflow};
