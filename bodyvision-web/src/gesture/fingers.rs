//! Extended/curled state per finger from screen-space landmark order
//!
//! These are 2-D heuristics on the camera image, not flexion angles:
//! a finger is "extended" when its joints climb the screen toward the tip.

use crate::landmarks::*;

/// (tip, pip, mcp) for the four non-thumb fingers
const FINGER_JOINTS: [(usize, usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
    (RING_TIP, RING_PIP, RING_MCP),
    (PINKY_TIP, PINKY_PIP, PINKY_MCP),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Caller guarantees a full 21-point hand
    pub fn from_landmarks(landmarks: &[Landmark], thumb_ratio: f32) -> Self {
        let [index, middle, ring, pinky] =
            FINGER_JOINTS.map(|(tip, pip, mcp)| finger_extended(landmarks, tip, pip, mcp));

        Self {
            thumb: thumb_extended(landmarks, thumb_ratio),
            index,
            middle,
            ring,
            pinky,
        }
    }

    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self { thumb, index, middle, ring, pinky }
    }
}

/// Tip above the PIP, PIP above the MCP (screen y grows downward)
pub fn finger_extended(landmarks: &[Landmark], tip: usize, pip: usize, mcp: usize) -> bool {
    landmarks[tip].y < landmarks[pip].y && landmarks[pip].y < landmarks[mcp].y
}

/// Thumb tip noticeably further sideways from the index base than the thumb MCP
pub fn thumb_extended(landmarks: &[Landmark], ratio: f32) -> bool {
    let index_base = landmarks[INDEX_MCP].x;
    let tip_reach = (landmarks[THUMB_TIP].x - index_base).abs();
    let mcp_reach = (landmarks[THUMB_MCP].x - index_base).abs();

    tip_reach > mcp_reach * ratio
}
