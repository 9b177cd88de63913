//! Post-match tuning constants
//!
//! Rating weights and XP multipliers live here instead of being scattered
//! as magic numbers. The growth threshold step table is fixed and lives in
//! `growth::match_growth`.
//!
//! ## Usage
//!
//! ```rust
//! use of_growth::config::GrowthConfig;
//!
//! let config = GrowthConfig::default();
//! let from_env = GrowthConfig::from_env_or_default();
//! ```
//!
//! ## Environment Variables
//!
//! - `OF_GROWTH_CONFIG`: path to a JSON file overriding any subset of fields

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GrowthError, Result};

pub const CONFIG_ENV_VAR: &str = "OF_GROWTH_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Match rating formula
    pub rating: RatingConfig,
    /// XP accumulation and leveling
    pub xp: XpConfig,
}

/// Weights of the 0-10 match rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub base: f32,
    pub win_bonus: f32,
    pub draw_bonus: f32,
    pub loss_bonus: f32,
    pub goal: f32,
    pub assist: f32,
    pub shot_on_target: f32,
    pub pass_completed: f32,
    pub tackle: f32,
    pub foul: f32,
    pub yellow_card: f32,
    pub red_card: f32,
    /// Applied per own goal, i.e. per point of negative `goals`
    pub own_goal: f32,
    /// Goalkeepers only
    pub save: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            base: 6.0,
            win_bonus: 0.5,
            draw_bonus: 0.0,
            loss_bonus: -0.3,
            goal: 1.5,
            assist: 1.0,
            shot_on_target: 0.1,
            pass_completed: 0.01,
            tackle: 0.2,
            foul: -0.1,
            yellow_card: -0.5,
            red_card: -2.0,
            own_goal: -3.0,
            save: 0.3,
            min: 0.0,
            max: 10.0,
        }
    }
}

/// XP earned per event and how it turns into attribute points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpConfig {
    pub success_multiplier: f32,
    pub failure_multiplier: f32,
    /// Upper bound of points a single attribute gains in one match
    pub max_gain_per_match: u8,
    /// Used when the store has no value for an attribute
    pub default_attribute: u8,
    pub attribute_min: u8,
    pub attribute_max: u8,
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            success_multiplier: 1.5,
            failure_multiplier: 0.5,
            max_gain_per_match: 3,
            default_attribute: 50,
            attribute_min: 0,
            attribute_max: 100,
        }
    }
}

impl GrowthConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GrowthError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| GrowthError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Load from `OF_GROWTH_CONFIG`, falling back to defaults.
    pub fn from_env_or_default() -> Self {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => match Self::from_file(path.trim()) {
                Ok(config) => config,
                Err(err) => {
                    warn!(%err, "falling back to default growth config");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let xp = &self.xp;
        if xp.success_multiplier < 0.0 || xp.failure_multiplier < 0.0 {
            return Err(GrowthError::InvalidConfig("xp multipliers must be >= 0".to_string()));
        }
        if xp.max_gain_per_match == 0 {
            return Err(GrowthError::InvalidConfig("max_gain_per_match must be >= 1".to_string()));
        }
        if xp.attribute_min > xp.attribute_max {
            return Err(GrowthError::InvalidConfig(format!(
                "attribute bounds out of order: {} > {}",
                xp.attribute_min, xp.attribute_max
            )));
        }
        if self.rating.min > self.rating.max {
            return Err(GrowthError::InvalidConfig(format!(
                "rating bounds out of order: {} > {}",
                self.rating.min, self.rating.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = GrowthConfig::default();
        assert!((cfg.rating.base - 6.0).abs() < 0.001);
        assert!((cfg.xp.success_multiplier - 1.5).abs() < 0.001);
        assert_eq!(cfg.xp.max_gain_per_match, 3);
        assert_eq!(cfg.xp.default_attribute, 50);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = GrowthConfig::from_json_str(r#"{"xp": {"max_gain_per_match": 2}}"#).unwrap();
        assert_eq!(cfg.xp.max_gain_per_match, 2);
        assert!((cfg.xp.failure_multiplier - 0.5).abs() < 0.001);
        assert_eq!(cfg.rating, RatingConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GrowthConfig::from_json_str(r#"{"xp": {"max_gain_per_match": 0}}"#).unwrap_err();
        assert!(matches!(err, GrowthError::InvalidConfig(_)));

        let err = GrowthConfig::from_json_str(r#"{"xp": {"success_multiplier": -1.0}}"#)
            .unwrap_err();
        assert!(matches!(err, GrowthError::InvalidConfig(_)));

        assert!(GrowthConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rating": {{"win_bonus": 1.0}}}}"#).unwrap();

        let cfg = GrowthConfig::from_file(file.path()).unwrap();
        assert!((cfg.rating.win_bonus - 1.0).abs() < 0.001);
        assert!((cfg.rating.loss_bonus + 0.3).abs() < 0.001);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = GrowthConfig::from_file("/nonexistent/of_growth.json").unwrap_err();
        assert!(matches!(err, GrowthError::InvalidConfig(_)));
    }
}
