//! XP Bucket
//!
//! 경기 중 XP 누적 버킷
//!
//! 각 스탯별로 XP를 누적하고, 경기 종료 시 스탯 성장으로 변환.
//! 스탯은 처음 XP를 받은 순서대로 유지됨 (하이라이트 동점 정렬 기준).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::XpConfig;

use super::hero_action_tag::{HeroActionTag, HeroXpEvent, PlayerAttribute};

/// Leftover XP carried between matches, stored on the player record.
pub type XpOverflow = BTreeMap<PlayerAttribute, f32>;

/// XP = base_xp × (성공 1.5 | 실패 0.5)
pub fn calculate_xp(tag: HeroActionTag, success: bool, config: &XpConfig) -> f32 {
    let mult = if success { config.success_multiplier } else { config.failure_multiplier };
    tag.base_xp() * mult
}

/// 경기 중 XP 누적 버킷
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroXpBucket {
    /// 스탯별 누적 XP (encounter order)
    accumulated: Vec<(PlayerAttribute, f32)>,
    /// 이벤트 히스토리 (디버깅/리플레이용)
    events: Vec<HeroXpEvent>,
    successful_events: usize,
}

impl HeroXpBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one action and distribute its XP.
    pub fn add_action(
        &mut self,
        tag: HeroActionTag,
        success: bool,
        minute: u8,
        config: &XpConfig,
    ) -> f32 {
        let xp = calculate_xp(tag, success, config);
        self.add_event(HeroXpEvent { tag, success, minute, xp });
        xp
    }

    /// 이벤트의 XP를 태그의 영향 스탯에 분배
    pub fn add_event(&mut self, event: HeroXpEvent) {
        for (attr, weight) in event.tag.affected_attributes() {
            self.add_xp(*attr, event.xp * weight);
        }
        if event.success {
            self.successful_events += 1;
        }
        self.events.push(event);
    }

    /// Add raw XP to one attribute.
    pub fn add_xp(&mut self, attr: PlayerAttribute, xp: f32) {
        match self.accumulated.iter_mut().find(|(a, _)| *a == attr) {
            Some((_, total)) => *total += xp,
            None => self.accumulated.push((attr, xp)),
        }
    }

    pub fn get_xp(&self, attr: PlayerAttribute) -> f32 {
        self.accumulated.iter().find(|(a, _)| *a == attr).map(|(_, xp)| *xp).unwrap_or(0.0)
    }

    /// 누적 XP (처음 받은 순서)
    pub fn iter(&self) -> impl Iterator<Item = (PlayerAttribute, f32)> + '_ {
        self.accumulated.iter().copied()
    }

    pub fn total_xp(&self) -> f32 {
        self.accumulated.iter().map(|(_, xp)| xp).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }

    pub fn events(&self) -> &[HeroXpEvent] {
        &self.events
    }

    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    pub fn success_rate(&self) -> f32 {
        if self.events.is_empty() {
            0.0
        } else {
            self.successful_events as f32 / self.events.len() as f32
        }
    }

    /// 버킷 초기화 (새 경기 시작)
    pub fn clear(&mut self) {
        self.accumulated.clear();
        self.events.clear();
        self.successful_events = 0;
    }

    /// 이전 경기에서 이월된 XP 합산
    ///
    /// Attributes only present in the overflow are appended in attribute order.
    /// 음수 이월값은 0으로 취급
    pub fn apply_overflow(&mut self, overflow: &XpOverflow) {
        for (attr, xp) in overflow {
            self.add_xp(*attr, xp.max(0.0));
        }
    }

    /// 훈련 시너지 보너스
    ///
    /// 최근 훈련한 스탯의 XP를 `1 + bonus_rate` 배로
    pub fn apply_training_synergy(&mut self, trained_attrs: &[PlayerAttribute], bonus_rate: f32) {
        let factor = 1.0 + bonus_rate.max(0.0);
        for (attr, xp) in self.accumulated.iter_mut() {
            if trained_attrs.contains(attr) {
                *xp *= factor;
            }
        }
    }
}
