//! Match Growth
//!
//! 경기 종료 시 XP → 스탯 성장 변환
//!
//! ## 성장 곡선
//! 스탯이 높을수록 성장에 더 많은 XP 필요
//!
//! | 현재 스탯 | XP 임계값 |
//! |----------|----------|
//! | 0-40     | 10       |
//! | 41-60    | 15       |
//! | 61-75    | 25       |
//! | 76-85    | 40       |
//! | 86-90    | 60       |
//! | 91-95    | 100      |
//! | 96-99    | 200      |
//! | 100+     | 500      |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::XpConfig;

use super::hero_action_tag::PlayerAttribute;
use super::xp_bucket::{HeroXpBucket, XpOverflow};

/// 스탯 +1 에 필요한 XP 임계값
pub fn growth_threshold(current_stat: u8) -> f32 {
    match current_stat {
        0..=40 => 10.0,
        41..=60 => 15.0,
        61..=75 => 25.0,
        76..=85 => 40.0,
        86..=90 => 60.0,
        91..=95 => 100.0,
        96..=99 => 200.0,
        _ => 500.0,
    }
}

/// 경기 종료 시 XP → 스탯 변환 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroMatchGrowth {
    /// 실제 스탯 증가량 (1..=max_gain_per_match)
    pub stat_gains: BTreeMap<PlayerAttribute, u8>,
    /// 다음 경기로 이월되는 XP
    pub xp_overflow: XpOverflow,
    /// 이월분 포함 총 XP (진단용)
    pub total_xp_earned: f32,
    /// UI 강조용 하이라이트 (증가량 높은 순, 동점은 누적 순서)
    pub highlight_gains: Vec<(PlayerAttribute, u8)>,
}

impl HeroMatchGrowth {
    /// XP 버킷을 스탯 성장으로 변환
    ///
    /// `previous_overflow` is merged into a copy of the bucket first, so an
    /// attribute that only has carried XP can still level. Attributes missing
    /// from `current_stats` use `config.default_attribute`.
    pub fn from_bucket<F>(
        bucket: &HeroXpBucket,
        previous_overflow: &XpOverflow,
        current_stats: F,
        config: &XpConfig,
    ) -> Self
    where
        F: Fn(PlayerAttribute) -> Option<u8>,
    {
        let mut merged = bucket.clone();
        merged.apply_overflow(previous_overflow);

        let mut gains = BTreeMap::new();
        let mut overflow = XpOverflow::new();
        let mut highlight = Vec::new();
        let cap = config.max_gain_per_match;

        for (attr, xp) in merged.iter() {
            if xp <= 0.0 {
                continue;
            }
            let current = current_stats(attr).unwrap_or(config.default_attribute);
            let threshold = growth_threshold(current);

            if xp >= threshold {
                let points = (xp / threshold).floor().min(cap as f32) as u8;
                let leftover = (xp - points as f32 * threshold).max(0.0);

                if points > 0 {
                    gains.insert(attr, points);
                    highlight.push((attr, points));
                }
                overflow.insert(attr, leftover);
            } else {
                // 임계값 미만 → 전량 이월
                overflow.insert(attr, xp);
            }
        }

        // stable sort: 동점은 누적 순서 유지
        highlight.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            stat_gains: gains,
            xp_overflow: overflow,
            total_xp_earned: merged.total_xp(),
            highlight_gains: highlight,
        }
    }

    pub fn has_growth(&self) -> bool {
        !self.stat_gains.is_empty()
    }

    pub fn get_gain(&self, attr: PlayerAttribute) -> u8 {
        self.stat_gains.get(&attr).copied().unwrap_or(0)
    }

    pub fn get_overflow(&self, attr: PlayerAttribute) -> f32 {
        self.xp_overflow.get(&attr).copied().unwrap_or(0.0)
    }

    pub fn total_gains(&self) -> u32 {
        self.stat_gains.values().map(|g| *g as u32).sum()
    }

    /// 요약 텍스트 (상위 3개)
    pub fn summary(&self) -> String {
        if self.highlight_gains.is_empty() {
            "No stat growth this match, XP carried over.".to_string()
        } else {
            let gains: Vec<String> = self
                .highlight_gains
                .iter()
                .take(3)
                .map(|(attr, gain)| format!("{} +{}", attr.display_name(), gain))
                .collect();
            format!("Growth: {}", gains.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::hero_action_tag::HeroActionTag;

    fn grow(bucket: &HeroXpBucket, stat: u8) -> HeroMatchGrowth {
        HeroMatchGrowth::from_bucket(bucket, &XpOverflow::new(), |_| Some(stat), &XpConfig::default())
    }

    #[test]
    fn test_growth_threshold() {
        assert_eq!(growth_threshold(30), 10.0);
        assert_eq!(growth_threshold(40), 10.0);
        assert_eq!(growth_threshold(41), 15.0);
        assert_eq!(growth_threshold(50), 15.0);
        assert_eq!(growth_threshold(70), 25.0);
        assert_eq!(growth_threshold(80), 40.0);
        assert_eq!(growth_threshold(88), 60.0);
        assert_eq!(growth_threshold(93), 100.0);
        assert_eq!(growth_threshold(98), 200.0);
        assert_eq!(growth_threshold(99), 200.0);
        assert_eq!(growth_threshold(100), 500.0);
    }

    #[test]
    fn test_match_growth_from_bucket() {
        let mut bucket = HeroXpBucket::new();
        // 스루 패스 10회 성공 → 75 XP → Passing 30, Vision 30, Decisions 15
        for minute in 0..10 {
            bucket.add_action(HeroActionTag::ThroughPass, true, minute, &XpConfig::default());
        }

        let growth = grow(&bucket, 50);

        assert!(growth.has_growth());
        assert_eq!(growth.get_gain(PlayerAttribute::Passing), 2);
        assert_eq!(growth.get_gain(PlayerAttribute::Vision), 2);
        assert_eq!(growth.get_gain(PlayerAttribute::Decisions), 1);
        assert_eq!(growth.total_gains(), 5);
        // 동점은 누적 순서 (Passing → Vision)
        assert_eq!(
            growth.highlight_gains,
            vec![
                (PlayerAttribute::Passing, 2),
                (PlayerAttribute::Vision, 2),
                (PlayerAttribute::Decisions, 1),
            ]
        );
    }

    #[test]
    fn test_growth_max_3_per_stat() {
        let mut bucket = HeroXpBucket::new();
        bucket.add_xp(PlayerAttribute::Passing, 10_000.0);

        let growth = grow(&bucket, 30);

        assert_eq!(growth.get_gain(PlayerAttribute::Passing), 3);
        // conservation: 3 × 10 + leftover
        assert!((growth.get_overflow(PlayerAttribute::Passing) - 9_970.0).abs() < 0.01);
    }

    #[test]
    fn test_below_threshold_carries_everything() {
        let mut bucket = HeroXpBucket::new();
        bucket.add_action(HeroActionTag::SafePass, true, 45, &XpConfig::default());

        let growth = grow(&bucket, 80); // threshold 40

        assert!(!growth.has_growth());
        assert!((growth.get_overflow(PlayerAttribute::Passing) - 0.9).abs() < 1e-5);
        assert!((growth.get_overflow(PlayerAttribute::Composure) - 0.6).abs() < 1e-5);
        assert!(growth.highlight_gains.is_empty());
    }

    #[test]
    fn test_overflow_only_attribute_is_processed() {
        let bucket = HeroXpBucket::new();
        let previous = XpOverflow::from([(PlayerAttribute::Marking, 11.0)]);

        let growth =
            HeroMatchGrowth::from_bucket(&bucket, &previous, |_| Some(35), &XpConfig::default());

        assert_eq!(growth.get_gain(PlayerAttribute::Marking), 1);
        assert!((growth.get_overflow(PlayerAttribute::Marking) - 1.0).abs() < 1e-5);
        assert!((growth.total_xp_earned - 11.0).abs() < 1e-5);
    }

    #[test]
    fn test_missing_attribute_uses_default() {
        let mut bucket = HeroXpBucket::new();
        bucket.add_xp(PlayerAttribute::Pace, 14.0);

        // default 50 → threshold 15
        let growth = HeroMatchGrowth::from_bucket(
            &bucket,
            &XpOverflow::new(),
            |_| None,
            &XpConfig::default(),
        );
        assert!(!growth.has_growth());
        assert!((growth.get_overflow(PlayerAttribute::Pace) - 14.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_xp_is_skipped() {
        let mut bucket = HeroXpBucket::new();
        bucket.add_xp(PlayerAttribute::Flair, 0.0);

        let growth = grow(&bucket, 50);
        assert!(growth.xp_overflow.is_empty());
    }

    #[test]
    fn test_negative_carried_xp_dropped() {
        let previous = XpOverflow::from([(PlayerAttribute::Passing, -5.0)]);

        let growth = HeroMatchGrowth::from_bucket(
            &HeroXpBucket::new(),
            &previous,
            |_| Some(50),
            &XpConfig::default(),
        );

        assert!(!growth.has_growth());
        assert!(growth.xp_overflow.is_empty());
        assert_eq!(growth.total_xp_earned, 0.0);
    }

    #[test]
    fn test_summary() {
        let growth = HeroMatchGrowth::default();
        assert!(growth.summary().contains("No stat growth"));

        let mut growth = HeroMatchGrowth::default();
        growth.highlight_gains.push((PlayerAttribute::Passing, 2));
        growth.highlight_gains.push((PlayerAttribute::LongShots, 1));
        assert_eq!(growth.summary(), "Growth: Passing +2, Long Shots +1");
    }
}
