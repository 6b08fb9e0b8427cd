//! Posture score (0-100)

use super::alignment::BodyAlignment;
use super::joints::JointAngles;

/// Lean tolerated before the score starts dropping, in degrees
const LEAN_TOLERANCE: f32 = 10.0;
const LEAN_PENALTY_PER_DEGREE: f32 = 2.0;
const TILT_PENALTY: f32 = 50.0;
const SYMMETRY_BONUS_ABOVE: f32 = 90.0;
const SYMMETRY_BONUS: f32 = 5.0;

/// Starts from 100, penalizes lean beyond tolerance and both tilts,
/// rewards good symmetry, then clamps to [0, 100]
pub fn posture_score(angles: &JointAngles, alignment: &BodyAlignment) -> f32 {
    let mut score = 100.0;

    if angles.torso_lean > LEAN_TOLERANCE {
        score -= (angles.torso_lean - LEAN_TOLERANCE) * LEAN_PENALTY_PER_DEGREE;
    }

    score -= alignment.shoulder_tilt * TILT_PENALTY;
    score -= alignment.hip_tilt * TILT_PENALTY;

    if alignment.symmetry_score > SYMMETRY_BONUS_ABOVE {
        score += SYMMETRY_BONUS;
    }

    // NaN from degenerate input collapses to 0 rather than escaping the range
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
