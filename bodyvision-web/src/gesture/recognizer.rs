//! Gesture recognizer with a bounded history of accepted detections

use std::collections::BTreeMap;

use tracing::debug;

use super::fingers::FingerStates;
use super::model::{Gesture, GestureDetection, Handedness};
use super::rules::classify;
use crate::config::GestureConfig;
use crate::history::History;
use crate::landmarks::{Landmark, HAND_LANDMARK_COUNT};
use crate::time::now_ms;

/// An accepted detection and when it happened (ms)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedDetection {
    pub detection: GestureDetection,
    pub timestamp: f64,
}

pub struct GestureRecognizer {
    config: GestureConfig,
    history: History<TimedDetection>,
    last_gesture: Option<GestureDetection>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            history: History::new(config.history_capacity),
            config,
            last_gesture: None,
        }
    }

    /// Classify one hand, stamped with the current time
    ///
    /// Empty input (no hand this frame) yields the `None` sentinel, as does
    /// a partial hand with fewer than 21 points.
    pub fn detect(&mut self, landmarks: &[Landmark], handedness: Handedness) -> GestureDetection {
        self.detect_at(landmarks, handedness, now_ms())
    }

    pub fn detect_at(
        &mut self,
        landmarks: &[Landmark],
        _handedness: Handedness,
        timestamp: f64,
    ) -> GestureDetection {
        if landmarks.len() < HAND_LANDMARK_COUNT {
            return GestureDetection::none();
        }

        let states = FingerStates::from_landmarks(landmarks, self.config.thumb_extension_ratio);
        let detection = classify(&states, landmarks, &self.config);

        if detection.confidence > self.config.acceptance_threshold {
            self.record(detection, timestamp);
        }

        detection
    }

    /// Store an accepted detection and make it the last gesture
    pub fn record(&mut self, detection: GestureDetection, timestamp: f64) {
        debug!(
            gesture = detection.gesture.as_str(),
            confidence = detection.confidence,
            "gesture accepted"
        );
        self.history.push(TimedDetection { detection, timestamp });
        self.last_gesture = Some(detection);
    }

    /// Count of each gesture in the retained history
    pub fn statistics(&self) -> BTreeMap<Gesture, usize> {
        let mut stats = BTreeMap::new();
        for entry in self.history.iter() {
            *stats.entry(entry.detection.gesture).or_insert(0) += 1;
        }
        stats
    }

    pub fn last_gesture(&self) -> Option<&GestureDetection> {
        self.last_gesture.as_ref()
    }

    /// Last `n` accepted detections, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &TimedDetection> {
        self.history.recent(n)
    }

    pub fn history(&self) -> impl Iterator<Item = &TimedDetection> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.last_gesture = None;
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
