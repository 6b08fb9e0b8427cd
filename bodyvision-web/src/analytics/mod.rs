//! Pose analytics - joint angles, alignment, posture score, movement
//!
//! Re-exports only. All logic in submodules.

mod alignment;
mod engine;
mod joints;
mod movement;
mod posture;

pub use alignment::{body_alignment, BodyAlignment};
pub use engine::{PoseAnalytics, PoseSnapshot, Trends, DEFAULT_TREND_WINDOW};
pub use joints::{joint_angles, torso_lean, JointAngles, JointName, JOINT_TRIPLES};
pub use movement::{classify_movement, Movement, MovementClass, ASSUMED_FPS};
pub use posture::posture_score;
