//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod gesture;
mod pose;

pub use gesture::{GestureView, HandGestureRecognizer};
pub use pose::{PoseAnalyzer, PoseSnapshotView, TrendsView};
