//! Telemetry payloads for the page's analytics sink
//!
//! The page POSTs these as JSON; building them is all this crate does.
//! `to_json` keys are camelCase for in-page consumers. The Flask analytics
//! endpoint reads snake_case top-level keys (`posture_score`,
//! `joint_angles`, `body_alignment`), so POST `to_sink_json` there.

use serde::Serialize;

use crate::analytics::{BodyAlignment, JointAngles};
use crate::gesture::Gesture;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureReport {
    pub posture_score: f32,
    pub joint_angles: JointAngles,
    pub body_alignment: BodyAlignment,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GestureReport {
    pub gesture: Gesture,
    pub confidence: f32,
}

/// Same payload with the snake_case top-level keys the server reads
#[derive(Serialize)]
struct SinkPostureReport<'a> {
    posture_score: f32,
    joint_angles: &'a JointAngles,
    body_alignment: &'a BodyAlignment,
}

impl PostureReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_sink_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&SinkPostureReport {
            posture_score: self.posture_score,
            joint_angles: &self.joint_angles,
            body_alignment: &self.body_alignment,
        })
    }
}

impl GestureReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posture_report_shape() {
        let report = PostureReport {
            posture_score: 87.5,
            joint_angles: JointAngles { left_elbow: 90.0, ..Default::default() },
            body_alignment: BodyAlignment::default(),
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["postureScore"], 87.5);
        assert_eq!(value["jointAngles"]["leftElbow"], 90.0);
        assert!(value["bodyAlignment"]["symmetryScore"].is_number());
    }

    #[test]
    fn test_sink_payload_uses_snake_case_keys() {
        let report = PostureReport {
            posture_score: 62.0,
            joint_angles: JointAngles { left_knee: 170.0, ..Default::default() },
            body_alignment: BodyAlignment::default(),
        };
        let json = report.to_sink_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["posture_score"], 62.0);
        assert_eq!(value["joint_angles"]["leftKnee"], 170.0);
        assert!(value["body_alignment"].is_object());
        assert!(value.get("postureScore").is_none());
    }

    #[test]
    fn test_gesture_report_shape() {
        let report = GestureReport { gesture: Gesture::Peace, confidence: 0.85 };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["gesture"], "PEACE");
        assert!((value["confidence"].as_f64().unwrap() - 0.85).abs() < 1e-6);
    }
}
