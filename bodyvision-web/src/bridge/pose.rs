//! Pose analytics exposed to JavaScript
//!
//! Receives MediaPipe pose landmarks as a flat Float32Array
//! (33 landmarks × x, y, z, visibility) once per frame.

use wasm_bindgen::prelude::*;

use crate::analytics::{JointName, PoseAnalytics, PoseSnapshot, Trends, DEFAULT_TREND_WINDOW};
use crate::config::Config;
use crate::landmarks::{self, landmarks_from_flat, POSE_STRIDE};

/// JS handle around one pose analytics engine
#[wasm_bindgen]
pub struct PoseAnalyzer {
    engine: PoseAnalytics,
}

#[wasm_bindgen]
impl PoseAnalyzer {
    /// `configJson` may carry any subset of the config document
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PoseAnalyzer, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json)?,
            None => Config::default(),
        };
        console_log!(
            "✅ Pose analytics ready (history {})",
            config.analytics.history_capacity
        );
        Ok(Self {
            engine: PoseAnalytics::with_config(config.analytics),
        })
    }

    /// Analyze one frame; `undefined` when no full pose is present
    pub fn analyze(&mut self, data: &[f32]) -> Option<PoseSnapshotView> {
        let landmarks = match landmarks_from_flat(data, POSE_STRIDE) {
            Ok(lms) => lms,
            Err(e) => {
                web_sys::console::warn_1(&format!("Invalid pose landmark data: {}", e).into());
                return None;
            }
        };
        self.engine
            .analyze(&landmarks)
            .map(|snapshot| PoseSnapshotView { snapshot })
    }

    /// Averages over the last `window` frames (default 10)
    pub fn trends(&self, window: Option<usize>) -> Option<TrendsView> {
        self.engine
            .trends(window.unwrap_or(DEFAULT_TREND_WINDOW))
            .map(TrendsView::from)
    }

    #[wasm_bindgen(js_name = "clearHistory")]
    pub fn clear_history(&mut self) {
        self.engine.clear_history();
    }

    #[wasm_bindgen(getter, js_name = "historyLength")]
    pub fn history_length(&self) -> usize {
        self.engine.len()
    }

    /// Names of pose landmarks above the visibility threshold (default 0.5)
    #[wasm_bindgen(js_name = "visibleParts")]
    pub fn visible_parts(data: &[f32], min_visibility: Option<f32>) -> js_sys::Array {
        let names = js_sys::Array::new();
        match landmarks_from_flat(data, POSE_STRIDE) {
            Ok(lms) => {
                let threshold = min_visibility.unwrap_or(landmarks::DEFAULT_MIN_VISIBILITY);
                for (_, name) in landmarks::visible_parts(&lms, threshold) {
                    names.push(&JsValue::from_str(name));
                }
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Invalid pose landmark data: {}", e).into());
            }
        }
        names
    }
}

/// One analyzed frame, read from JS through getters
#[wasm_bindgen]
pub struct PoseSnapshotView {
    snapshot: PoseSnapshot,
}

#[wasm_bindgen]
impl PoseSnapshotView {
    #[wasm_bindgen(getter, js_name = "postureScore")]
    pub fn posture_score(&self) -> f32 {
        self.snapshot.posture_score
    }

    #[wasm_bindgen(getter, js_name = "torsoLean")]
    pub fn torso_lean(&self) -> f32 {
        self.snapshot.joint_angles.torso_lean
    }

    /// Angle for a camelCase joint name such as "leftElbow"
    #[wasm_bindgen(js_name = "jointAngle")]
    pub fn joint_angle(&self, name: &str) -> Option<f32> {
        JointName::from_name(name).map(|joint| self.snapshot.joint_angles.get(joint))
    }

    #[wasm_bindgen(getter, js_name = "shoulderTilt")]
    pub fn shoulder_tilt(&self) -> f32 {
        self.snapshot.body_alignment.shoulder_tilt
    }

    #[wasm_bindgen(getter, js_name = "hipTilt")]
    pub fn hip_tilt(&self) -> f32 {
        self.snapshot.body_alignment.hip_tilt
    }

    #[wasm_bindgen(getter, js_name = "spinalAlignment")]
    pub fn spinal_alignment(&self) -> f32 {
        self.snapshot.body_alignment.spinal_alignment
    }

    #[wasm_bindgen(getter, js_name = "symmetryScore")]
    pub fn symmetry_score(&self) -> f32 {
        self.snapshot.body_alignment.symmetry_score
    }

    #[wasm_bindgen(getter)]
    pub fn movement(&self) -> String {
        self.snapshot.movement.classification.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f32 {
        self.snapshot.movement.speed
    }

    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> f32 {
        self.snapshot.movement.velocity
    }

    #[wasm_bindgen(getter)]
    pub fn timestamp(&self) -> f64 {
        self.snapshot.timestamp
    }

    /// Telemetry payload: `{postureScore, jointAngles, bodyAlignment}`
    #[wasm_bindgen(js_name = "toJson")]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.snapshot
            .report()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Telemetry payload for the server sink: `{posture_score, joint_angles, body_alignment}`
    #[wasm_bindgen(js_name = "toSinkJson")]
    pub fn to_sink_json(&self) -> Result<String, JsValue> {
        self.snapshot
            .report()
            .to_sink_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whole snapshot, including movement and timestamp
    #[wasm_bindgen(js_name = "snapshotJson")]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct TrendsView {
    #[wasm_bindgen(js_name = "averagePostureScore")]
    pub average_posture_score: f32,
    #[wasm_bindgen(js_name = "averageTorsoLean")]
    pub average_torso_lean: f32,
    pub samples: usize,
}

impl From<Trends> for TrendsView {
    fn from(trends: Trends) -> Self {
        Self {
            average_posture_score: trends.average_posture_score,
            average_torso_lean: trends.average_torso_lean,
            samples: trends.sample_count,
        }
    }
}
