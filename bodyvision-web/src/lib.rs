//! BodyVision Web - pose analytics and hand gestures over MediaPipe landmarks
//!
//! The page runs MediaPipe and hands landmarks to this module each frame.
//! Core engines are plain Rust; `bridge` holds the wasm_bindgen handles.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (crate::log(&format_args!($($t)*).to_string()))
}

pub mod analytics;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod landmarks;
pub mod report;
pub mod time;

mod bridge;

pub use analytics::{PoseAnalytics, PoseSnapshot, Trends};
pub use bridge::{GestureView, HandGestureRecognizer, PoseAnalyzer, PoseSnapshotView, TrendsView};
pub use config::{AnalyticsConfig, Config, GestureConfig};
pub use gesture::{Gesture, GestureDetection, GestureRecognizer, Handedness};
pub use landmarks::Landmark;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
