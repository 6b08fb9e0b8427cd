//! Per-frame pose analysis with a bounded snapshot history

use serde::Serialize;
use tracing::{debug, trace};

use super::alignment::{body_alignment, BodyAlignment};
use super::joints::{joint_angles, JointAngles};
use super::movement::{classify_movement, Movement};
use super::posture::posture_score;
use crate::config::AnalyticsConfig;
use crate::history::History;
use crate::landmarks::{Landmark, POSE_LANDMARK_COUNT};
use crate::report::PostureReport;
use crate::time::now_ms;

/// Default number of snapshots averaged by [`PoseAnalytics::trends`]
pub const DEFAULT_TREND_WINDOW: usize = 10;

/// Analytics for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseSnapshot {
    pub joint_angles: JointAngles,
    pub body_alignment: BodyAlignment,
    /// Always within [0, 100]
    pub posture_score: f32,
    pub movement: Movement,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
    /// Copy of the analyzed frame, compared against by the next frame
    #[serde(skip)]
    pub landmarks: Vec<Landmark>,
}

impl PoseSnapshot {
    /// Telemetry payload for this frame
    pub fn report(&self) -> PostureReport {
        PostureReport {
            posture_score: self.posture_score,
            joint_angles: self.joint_angles,
            body_alignment: self.body_alignment,
        }
    }
}

/// Averages over the most recent snapshots
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub average_posture_score: f32,
    pub average_torso_lean: f32,
    pub sample_count: usize,
}

/// Pose analytics engine
///
/// One instance per tracked person. Not shared: all mutation goes
/// through `&mut self`.
pub struct PoseAnalytics {
    config: AnalyticsConfig,
    history: History<PoseSnapshot>,
}

impl PoseAnalytics {
    pub fn new() -> Self {
        Self::with_config(AnalyticsConfig::default())
    }

    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self {
            history: History::new(config.history_capacity),
            config,
        }
    }

    /// Analyze one frame, stamped with the current time
    ///
    /// Returns `None` (and records nothing) when fewer than 33 landmarks
    /// are supplied; that is the normal "no person this frame" outcome.
    pub fn analyze(&mut self, landmarks: &[Landmark]) -> Option<PoseSnapshot> {
        self.analyze_at(landmarks, now_ms())
    }

    /// Analyze one frame with an explicit timestamp (ms)
    pub fn analyze_at(&mut self, landmarks: &[Landmark], timestamp: f64) -> Option<PoseSnapshot> {
        if landmarks.len() < POSE_LANDMARK_COUNT {
            debug!(count = landmarks.len(), "insufficient pose landmarks, skipping frame");
            return None;
        }

        let joint_angles = joint_angles(landmarks);
        let body_alignment = body_alignment(landmarks);
        let posture_score = posture_score(&joint_angles, &body_alignment);
        let movement = self.movement_since_last(landmarks);

        let snapshot = PoseSnapshot {
            joint_angles,
            body_alignment,
            posture_score,
            movement,
            timestamp,
            landmarks: landmarks.to_vec(),
        };
        trace!(
            posture_score,
            torso_lean = joint_angles.torso_lean,
            movement = movement.classification.as_str(),
            "pose analyzed"
        );

        self.history.push(snapshot.clone());
        Some(snapshot)
    }

    /// Movement is only judged once two frames are already on record
    fn movement_since_last(&self, landmarks: &[Landmark]) -> Movement {
        if self.history.len() < 2 {
            return Movement::stationary();
        }
        match self.history.latest() {
            Some(prev) if !prev.landmarks.is_empty() => {
                classify_movement(landmarks, &prev.landmarks, &self.config.movement)
            }
            _ => Movement::stationary(),
        }
    }

    /// Average posture score and torso lean over the last `window` snapshots
    ///
    /// Uses fewer samples when the history is shorter; `None` if there are none.
    pub fn trends(&self, window: usize) -> Option<Trends> {
        let (count, posture_sum, lean_sum) = self
            .history
            .recent(window)
            .fold((0usize, 0.0f32, 0.0f32), |(n, p, l), s| {
                (n + 1, p + s.posture_score, l + s.joint_angles.torso_lean)
            });

        if count == 0 {
            return None;
        }

        Some(Trends {
            average_posture_score: posture_sum / count as f32,
            average_torso_lean: lean_sum / count as f32,
            sample_count: count,
        })
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Snapshots, oldest first
    pub fn history(&self) -> impl Iterator<Item = &PoseSnapshot> {
        self.history.iter()
    }

    pub fn latest(&self) -> Option<&PoseSnapshot> {
        self.history.latest()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}

impl Default for PoseAnalytics {
    fn default() -> Self {
        Self::new()
    }
}
