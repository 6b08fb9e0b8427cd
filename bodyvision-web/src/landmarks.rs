//! Landmark points and the MediaPipe index conventions
//!
//! Landmarks arrive from the external estimator as normalized coordinates.
//! The index constants below are the estimator's contract: analytics and
//! gesture rules address points by position, so these must not drift.

use serde::{Deserialize, Serialize};

use crate::error::LandmarkError;

// ============================================================================
// POSE LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

/// Minimum number of points in a pose landmark set
pub const POSE_LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Names of all 33 pose landmarks, in index order
pub const POSE_LANDMARK_NAMES: [&str; POSE_LANDMARK_COUNT] = [
    "nose",
    "left_eye_inner", "left_eye", "left_eye_outer",
    "right_eye_inner", "right_eye", "right_eye_outer",
    "left_ear", "right_ear",
    "mouth_left", "mouth_right",
    "left_shoulder", "right_shoulder",
    "left_elbow", "right_elbow",
    "left_wrist", "right_wrist",
    "left_pinky", "right_pinky",
    "left_index", "right_index",
    "left_thumb", "right_thumb",
    "left_hip", "right_hip",
    "left_knee", "right_knee",
    "left_ankle", "right_ankle",
    "left_heel", "right_heel",
    "left_foot_index", "right_foot_index",
];

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Values per pose landmark in a flat array: x, y, z, visibility
pub const POSE_STRIDE: usize = 4;

/// Values per hand landmark in a flat array: x, y, z
pub const HAND_STRIDE: usize = 3;

/// Visibility above which a pose landmark counts as detected
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    /// Relative depth; 0 when the estimator doesn't supply one
    #[serde(default)]
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Landmarks without a visibility score are treated as visible
    pub fn is_visible(&self, min_visibility: f32) -> bool {
        self.visibility.map_or(true, |v| v > min_visibility)
    }
}

/// Decode a flat array of `stride` values per landmark.
///
/// Stride 2 is (x, y), 3 adds z, 4 adds visibility.
pub fn landmarks_from_flat(data: &[f32], stride: usize) -> Result<Vec<Landmark>, LandmarkError> {
    if !(2..=4).contains(&stride) {
        return Err(LandmarkError::UnsupportedStride(stride));
    }
    if data.len() % stride != 0 {
        return Err(LandmarkError::RaggedData { len: data.len(), stride });
    }

    Ok(data
        .chunks_exact(stride)
        .map(|c| Landmark {
            x: c[0],
            y: c[1],
            z: c.get(2).copied().unwrap_or(0.0),
            visibility: c.get(3).copied(),
        })
        .collect())
}

/// Pose landmarks the estimator is confident about, as (index, name)
pub fn visible_parts(landmarks: &[Landmark], min_visibility: f32) -> Vec<(usize, &'static str)> {
    landmarks
        .iter()
        .zip(POSE_LANDMARK_NAMES.iter())
        .enumerate()
        .filter(|(_, (lm, _))| lm.is_visible(min_visibility))
        .map(|(i, (_, name))| (i, *name))
        .collect()
}
