//! Gesture module - rule-based hand gesture classification
//!
//! Re-exports only. All logic in submodules.

mod fingers;
mod model;
mod recognizer;
mod rules;

pub use fingers::{finger_extended, thumb_extended, FingerStates};
pub use model::{Gesture, GestureDetection, Handedness};
pub use recognizer::{GestureRecognizer, TimedDetection};
pub use rules::{classify, is_ok_sign, GestureRule, RuleMatch, GESTURE_RULES};
