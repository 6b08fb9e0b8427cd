//! Gesture labels and detection results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HandednessError;
use crate::report::GestureReport;

/// Gesture labels. `None` means no hand input, `Unknown` means no rule matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gesture {
    None,
    ThumbsUp,
    Peace,
    Rock,
    OpenPalm,
    Fist,
    Pointing,
    Ok,
    Unknown,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::None => "NONE",
            Gesture::ThumbsUp => "THUMBS_UP",
            Gesture::Peace => "PEACE",
            Gesture::Rock => "ROCK",
            Gesture::OpenPalm => "OPEN_PALM",
            Gesture::Fist => "FIST",
            Gesture::Pointing => "POINTING",
            Gesture::Ok => "OK",
            Gesture::Unknown => "UNKNOWN",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Gesture::None => "",
            Gesture::ThumbsUp => "👍",
            Gesture::Peace => "✌️",
            Gesture::Rock => "🤘",
            Gesture::OpenPalm => "🖐️",
            Gesture::Fist => "✊",
            Gesture::Pointing => "☝️",
            Gesture::Ok => "👌",
            Gesture::Unknown => "❓",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which hand the estimator reports. Carried through; no rule depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl FromStr for Handedness {
    type Err = HandednessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" | "left" => Ok(Handedness::Left),
            "Right" | "right" => Ok(Handedness::Right),
            other => Err(HandednessError(other.to_string())),
        }
    }
}

/// Result of classifying one hand in one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GestureDetection {
    pub gesture: Gesture,
    /// Fixed per-gesture constant, not a model probability
    pub confidence: f32,
    pub emoji: &'static str,
}

impl GestureDetection {
    pub fn new(gesture: Gesture, confidence: f32) -> Self {
        Self { gesture, confidence, emoji: gesture.emoji() }
    }

    /// Sentinel for missing or empty hand input
    pub fn none() -> Self {
        Self::new(Gesture::None, 0.0)
    }

    pub fn unknown() -> Self {
        Self::new(Gesture::Unknown, 0.0)
    }

    pub fn report(&self) -> GestureReport {
        GestureReport {
            gesture: self.gesture,
            confidence: self.confidence,
        }
    }
}
