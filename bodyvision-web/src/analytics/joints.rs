//! Joint angles from pose landmarks
//!
//! Each limb joint is the angle at a vertex landmark between its two
//! neighbours. Torso lean is measured separately against the vertical.

use serde::{Deserialize, Serialize};

use crate::geometry::{angle_degrees, midpoint};
use crate::landmarks::*;

/// Named body joints with a computed angle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JointName {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    TorsoLean,
}

impl JointName {
    pub const ALL: [JointName; 9] = [
        JointName::LeftShoulder,
        JointName::RightShoulder,
        JointName::LeftElbow,
        JointName::RightElbow,
        JointName::LeftHip,
        JointName::RightHip,
        JointName::LeftKnee,
        JointName::RightKnee,
        JointName::TorsoLean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JointName::LeftShoulder => "leftShoulder",
            JointName::RightShoulder => "rightShoulder",
            JointName::LeftElbow => "leftElbow",
            JointName::RightElbow => "rightElbow",
            JointName::LeftHip => "leftHip",
            JointName::RightHip => "rightHip",
            JointName::LeftKnee => "leftKnee",
            JointName::RightKnee => "rightKnee",
            JointName::TorsoLean => "torsoLean",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|j| j.as_str() == name)
    }
}

/// (joint, first endpoint, vertex, second endpoint) for every limb joint
///
/// Shoulder rows use the shoulder as both vertex and first endpoint, so the
/// shoulder "angle" is the heading of the shoulder→elbow ray from screen +x.
pub const JOINT_TRIPLES: [(JointName, usize, usize, usize); 8] = [
    (JointName::LeftShoulder, LEFT_SHOULDER, LEFT_SHOULDER, LEFT_ELBOW),
    (JointName::RightShoulder, RIGHT_SHOULDER, RIGHT_SHOULDER, RIGHT_ELBOW),
    (JointName::LeftElbow, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
    (JointName::RightElbow, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
    (JointName::LeftHip, LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE),
    (JointName::RightHip, RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE),
    (JointName::LeftKnee, LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
    (JointName::RightKnee, RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
];

/// Joint angles in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointAngles {
    pub left_shoulder: f32,
    pub right_shoulder: f32,
    pub left_elbow: f32,
    pub right_elbow: f32,
    pub left_hip: f32,
    pub right_hip: f32,
    pub left_knee: f32,
    pub right_knee: f32,
    pub torso_lean: f32,
}

impl JointAngles {
    pub fn get(&self, joint: JointName) -> f32 {
        match joint {
            JointName::LeftShoulder => self.left_shoulder,
            JointName::RightShoulder => self.right_shoulder,
            JointName::LeftElbow => self.left_elbow,
            JointName::RightElbow => self.right_elbow,
            JointName::LeftHip => self.left_hip,
            JointName::RightHip => self.right_hip,
            JointName::LeftKnee => self.left_knee,
            JointName::RightKnee => self.right_knee,
            JointName::TorsoLean => self.torso_lean,
        }
    }

    fn set(&mut self, joint: JointName, degrees: f32) {
        let slot = match joint {
            JointName::LeftShoulder => &mut self.left_shoulder,
            JointName::RightShoulder => &mut self.right_shoulder,
            JointName::LeftElbow => &mut self.left_elbow,
            JointName::RightElbow => &mut self.right_elbow,
            JointName::LeftHip => &mut self.left_hip,
            JointName::RightHip => &mut self.right_hip,
            JointName::LeftKnee => &mut self.left_knee,
            JointName::RightKnee => &mut self.right_knee,
            JointName::TorsoLean => &mut self.torso_lean,
        };
        *slot = degrees;
    }

    pub fn iter(&self) -> impl Iterator<Item = (JointName, f32)> + '_ {
        JointName::ALL.into_iter().map(move |j| (j, self.get(j)))
    }
}

/// All joint angles. Caller guarantees a full 33-point pose.
pub fn joint_angles(landmarks: &[Landmark]) -> JointAngles {
    let mut angles = JointAngles::default();

    for (joint, a, b, c) in JOINT_TRIPLES {
        angles.set(joint, angle_degrees(&landmarks[a], &landmarks[b], &landmarks[c]));
    }
    angles.torso_lean = torso_lean(landmarks);

    angles
}

/// Lean of the hip→shoulder midline from vertical, in degrees
///
/// Screen y grows downward, so an upright torso (shoulders above hips)
/// reads 0 and a horizontal one reads 90.
pub fn torso_lean(landmarks: &[Landmark]) -> f32 {
    let shoulder_mid = midpoint(&landmarks[LEFT_SHOULDER], &landmarks[RIGHT_SHOULDER]);
    let hip_mid = midpoint(&landmarks[LEFT_HIP], &landmarks[RIGHT_HIP]);

    let dx = shoulder_mid.x - hip_mid.x;
    let rise = hip_mid.y - shoulder_mid.y;

    dx.atan2(rise).to_degrees().abs()
}
