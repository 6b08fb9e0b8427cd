//! Tunable thresholds and capacities
//!
//! Loaded from JSON handed over by the page; every field is optional.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub analytics: AnalyticsConfig,
    pub gesture: GestureConfig,
}

/// Pose analytics settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Snapshots retained for movement and trends
    pub history_capacity: usize,
    pub movement: MovementThresholds,
}

/// Mean per-landmark displacement (normalized units per frame) above which
/// movement is classified SLOW / MODERATE / FAST
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementThresholds {
    pub slow: f32,
    pub moderate: f32,
    pub fast: f32,
}

/// Gesture classifier settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    pub history_capacity: usize,
    /// Detections must exceed this confidence to be recorded
    pub acceptance_threshold: f32,
    /// Max thumb-tip to index-tip distance for the OK sign
    pub ok_sign_distance: f32,
    /// Thumb counts as extended when its tip sits this many times further
    /// (horizontally) from the index base than its MCP does
    pub thumb_extension_ratio: f32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            history_capacity: 100,
            movement: MovementThresholds::default(),
        }
    }
}

impl Default for MovementThresholds {
    fn default() -> Self {
        Self {
            slow: 0.005,
            moderate: 0.02,
            fast: 0.05,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            history_capacity: 50,
            acceptance_threshold: 0.7,
            ok_sign_distance: 0.05,
            thumb_extension_ratio: 1.3,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analytics.validate()?;
        self.gesture.validate()
    }
}

impl AnalyticsConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("analytics.historyCapacity"));
        }
        let m = &self.movement;
        if !(0.0 <= m.slow && m.slow < m.moderate && m.moderate < m.fast) {
            return Err(ConfigError::UnorderedThresholds);
        }
        Ok(())
    }
}

impl GestureConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("gesture.historyCapacity"));
        }
        if !(0.0..=1.0).contains(&self.acceptance_threshold) {
            return Err(ConfigError::OutOfRange {
                name: "gesture.acceptanceThreshold",
                value: self.acceptance_threshold,
            });
        }
        if !(self.ok_sign_distance > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "gesture.okSignDistance",
                value: self.ok_sign_distance,
            });
        }
        if !(self.thumb_extension_ratio > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "gesture.thumbExtensionRatio",
                value: self.thumb_extension_ratio,
            });
        }
        Ok(())
    }
}
