//! Ordered gesture rule table
//!
//! Rules are tried top to bottom and the first match wins. Finger-state
//! heuristics can overlap, so reordering rows changes results.

use super::fingers::FingerStates;
use super::model::{Gesture, GestureDetection};
use crate::config::GestureConfig;
use crate::geometry::distance_2d;
use crate::landmarks::*;

/// What a rule tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleMatch {
    /// Exact thumb/index/middle/ring/pinky pattern
    Fingers(FingerStates),
    /// Thumb and index tips touching, other three fingers raised
    OkSign,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRule {
    pub matcher: RuleMatch,
    pub gesture: Gesture,
    pub confidence: f32,
}

const fn fingers(
    thumb: bool,
    index: bool,
    middle: bool,
    ring: bool,
    pinky: bool,
    gesture: Gesture,
    confidence: f32,
) -> GestureRule {
    GestureRule {
        matcher: RuleMatch::Fingers(FingerStates::new(thumb, index, middle, ring, pinky)),
        gesture,
        confidence,
    }
}

pub const GESTURE_RULES: [GestureRule; 7] = [
    //      thumb  index  middle ring   pinky
    fingers(true, false, false, false, false, Gesture::ThumbsUp, 0.9),
    fingers(false, true, true, false, false, Gesture::Peace, 0.85),
    fingers(false, true, false, false, true, Gesture::Rock, 0.85),
    fingers(true, true, true, true, true, Gesture::OpenPalm, 0.9),
    fingers(false, false, false, false, false, Gesture::Fist, 0.8),
    fingers(false, true, false, false, false, Gesture::Pointing, 0.85),
    GestureRule {
        matcher: RuleMatch::OkSign,
        gesture: Gesture::Ok,
        confidence: 0.8,
    },
];

impl GestureRule {
    fn matches(
        &self,
        states: &FingerStates,
        landmarks: &[Landmark],
        config: &GestureConfig,
    ) -> bool {
        match self.matcher {
            RuleMatch::Fingers(pattern) => pattern == *states,
            RuleMatch::OkSign => is_ok_sign(landmarks, config.ok_sign_distance),
        }
    }
}

/// First matching rule, or `Unknown` with zero confidence
pub fn classify(
    states: &FingerStates,
    landmarks: &[Landmark],
    config: &GestureConfig,
) -> GestureDetection {
    GESTURE_RULES
        .iter()
        .find(|rule| rule.matches(states, landmarks, config))
        .map(|rule| GestureDetection::new(rule.gesture, rule.confidence))
        .unwrap_or_else(GestureDetection::unknown)
}

/// Thumb tip within `max_distance` of the index tip (screen plane) and the
/// middle, ring and pinky tips each above their PIP joints
pub fn is_ok_sign(landmarks: &[Landmark], max_distance: f32) -> bool {
    let pinch = distance_2d(&landmarks[THUMB_TIP], &landmarks[INDEX_TIP]);
    let others_raised = [(MIDDLE_TIP, MIDDLE_PIP), (RING_TIP, RING_PIP), (PINKY_TIP, PINKY_PIP)]
        .iter()
        .all(|&(tip, pip)| landmarks[tip].y < landmarks[pip].y);

    pinch < max_distance && others_raised
}
