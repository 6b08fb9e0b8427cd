//! Frame-to-frame movement classification
//!
//! Compares two landmark sets point by point and buckets the mean
//! displacement into a coarse speed class.

use serde::{Deserialize, Serialize};

use crate::config::MovementThresholds;
use crate::geometry::distance;
use crate::landmarks::Landmark;

/// Frame rate used to turn per-frame displacement into velocity.
/// Fixed; the actual camera rate is not measured.
pub const ASSUMED_FPS: f32 = 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementClass {
    #[default]
    Static,
    Slow,
    Moderate,
    Fast,
}

impl MovementClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementClass::Static => "STATIC",
            MovementClass::Slow => "SLOW",
            MovementClass::Moderate => "MODERATE",
            MovementClass::Fast => "FAST",
        }
    }

    pub fn from_speed(speed: f32, thresholds: &MovementThresholds) -> Self {
        if speed > thresholds.fast {
            MovementClass::Fast
        } else if speed > thresholds.moderate {
            MovementClass::Moderate
        } else if speed > thresholds.slow {
            MovementClass::Slow
        } else {
            MovementClass::Static
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub classification: MovementClass,
    /// Mean per-landmark displacement since the previous frame
    pub speed: f32,
    /// `speed * ASSUMED_FPS`
    pub velocity: f32,
}

impl Movement {
    /// Baseline when there is nothing to compare against
    pub fn stationary() -> Self {
        Self::default()
    }
}

/// Mean 3-D displacement over the indices both sets share
pub fn classify_movement(
    current: &[Landmark],
    previous: &[Landmark],
    thresholds: &MovementThresholds,
) -> Movement {
    let overlap = current.len().min(previous.len());
    if overlap == 0 {
        return Movement::stationary();
    }

    let total: f32 = current
        .iter()
        .zip(previous)
        .map(|(now, before)| distance(now, before))
        .sum();
    let speed = total / overlap as f32;

    Movement {
        classification: MovementClass::from_speed(speed, thresholds),
        speed,
        velocity: speed * ASSUMED_FPS,
    }
}
