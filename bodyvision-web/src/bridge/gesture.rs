//! Hand gesture recognition exposed to JavaScript
//!
//! Receives one MediaPipe hand (21 landmarks × x, y, z) per call.

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::gesture::{GestureDetection, GestureRecognizer, Handedness};
use crate::landmarks::{landmarks_from_flat, HAND_STRIDE};

#[wasm_bindgen]
pub struct HandGestureRecognizer {
    recognizer: GestureRecognizer,
}

#[wasm_bindgen]
impl HandGestureRecognizer {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<HandGestureRecognizer, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json)?,
            None => Config::default(),
        };
        console_log!(
            "✅ Gesture recognizer ready (threshold {})",
            config.gesture.acceptance_threshold
        );
        Ok(Self {
            recognizer: GestureRecognizer::with_config(config.gesture),
        })
    }

    /// Classify one hand. Missing data yields the NONE gesture.
    pub fn detect(&mut self, data: Option<Vec<f32>>, handedness: &str) -> GestureView {
        let handedness = handedness.parse().unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("{}, assuming Right", e).into());
            Handedness::Right
        });

        let landmarks = match data.as_deref().map(|d| landmarks_from_flat(d, HAND_STRIDE)) {
            None => Vec::new(),
            Some(Ok(lms)) => lms,
            Some(Err(e)) => {
                web_sys::console::warn_1(&format!("Invalid hand landmark data: {}", e).into());
                Vec::new()
            }
        };

        GestureView::from(self.recognizer.detect(&landmarks, handedness))
    }

    /// `{"GESTURE": count}` over the retained history
    #[wasm_bindgen(js_name = "statisticsJson")]
    pub fn statistics_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.recognizer.statistics())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = "lastGesture")]
    pub fn last_gesture(&self) -> Option<GestureView> {
        self.recognizer.last_gesture().copied().map(GestureView::from)
    }

    #[wasm_bindgen(getter, js_name = "historyLength")]
    pub fn history_length(&self) -> usize {
        self.recognizer.len()
    }

    #[wasm_bindgen(js_name = "clearHistory")]
    pub fn clear_history(&mut self) {
        self.recognizer.clear_history();
    }
}

#[wasm_bindgen]
pub struct GestureView {
    detection: GestureDetection,
}

impl From<GestureDetection> for GestureView {
    fn from(detection: GestureDetection) -> Self {
        Self { detection }
    }
}

#[wasm_bindgen]
impl GestureView {
    #[wasm_bindgen(getter)]
    pub fn gesture(&self) -> String {
        self.detection.gesture.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn confidence(&self) -> f32 {
        self.detection.confidence
    }

    #[wasm_bindgen(getter)]
    pub fn emoji(&self) -> String {
        self.detection.emoji.to_string()
    }

    /// Telemetry payload: `{gesture, confidence}`
    #[wasm_bindgen(js_name = "toJson")]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.detection
            .report()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
