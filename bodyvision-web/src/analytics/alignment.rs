//! Shoulder/hip levelness and spinal length

use serde::{Deserialize, Serialize};

use crate::geometry::{distance, midpoint};
use crate::landmarks::{Landmark, LEFT_HIP, LEFT_SHOULDER, NOSE, RIGHT_HIP, RIGHT_SHOULDER};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyAlignment {
    /// Vertical offset between the shoulders (normalized units)
    pub shoulder_tilt: f32,
    /// Vertical offset between the hips (normalized units)
    pub hip_tilt: f32,
    /// Nose to hip midpoint distance
    pub spinal_alignment: f32,
    /// `100 - (shoulder_tilt + hip_tilt) * 100`, unclamped.
    /// Assumes normalized coordinates; pixel-space input will go far negative.
    pub symmetry_score: f32,
}

pub fn body_alignment(landmarks: &[Landmark]) -> BodyAlignment {
    let shoulder_tilt = (landmarks[LEFT_SHOULDER].y - landmarks[RIGHT_SHOULDER].y).abs();
    let hip_tilt = (landmarks[LEFT_HIP].y - landmarks[RIGHT_HIP].y).abs();

    // Hip midpoint sits at depth 0, the origin of MediaPipe's z axis
    let hip_mid = midpoint(&landmarks[LEFT_HIP], &landmarks[RIGHT_HIP]);
    let spinal_alignment = distance(&landmarks[NOSE], &hip_mid);

    BodyAlignment {
        shoulder_tilt,
        hip_tilt,
        spinal_alignment,
        symmetry_score: 100.0 - (shoulder_tilt + hip_tilt) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::POSE_LANDMARK_COUNT;

    #[test]
    fn test_level_body_is_symmetric() {
        let mut lms = vec![Landmark::new(0.5, 0.5, 0.0); POSE_LANDMARK_COUNT];
        lms[NOSE] = Landmark::new(0.5, 0.2, 0.0);
        lms[LEFT_HIP] = Landmark::new(0.6, 0.6, 0.0);
        lms[RIGHT_HIP] = Landmark::new(0.4, 0.6, 0.0);

        let alignment = body_alignment(&lms);
        assert_eq!(alignment.shoulder_tilt, 0.0);
        assert_eq!(alignment.hip_tilt, 0.0);
        assert_eq!(alignment.symmetry_score, 100.0);
        assert!((alignment.spinal_alignment - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_tilt_lowers_symmetry_without_clamping() {
        let mut lms = vec![Landmark::new(0.5, 0.5, 0.0); POSE_LANDMARK_COUNT];
        lms[LEFT_SHOULDER].y = 0.2;
        lms[RIGHT_SHOULDER].y = 0.9;
        lms[LEFT_HIP].y = 0.1;
        lms[RIGHT_HIP].y = 0.8;

        let alignment = body_alignment(&lms);
        assert!((alignment.shoulder_tilt - 0.7).abs() < 1e-6);
        assert!((alignment.hip_tilt - 0.7).abs() < 1e-6);
        assert!((alignment.symmetry_score - -40.0).abs() < 1e-3);
    }

    #[test]
    fn test_spine_uses_nose_depth() {
        let mut lms = vec![Landmark::new(0.5, 0.5, 0.7); POSE_LANDMARK_COUNT];
        lms[NOSE] = Landmark::new(0.5, 0.5, 0.3);
        // Hip depth is ignored, nose depth is not
        assert!((body_alignment(&lms).spinal_alignment - 0.3).abs() < 1e-6);
    }
}
