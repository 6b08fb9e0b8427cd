//! Errors at the crate's fallible seams
//!
//! Per-frame analysis never fails; these cover decoding and configuration.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Flat landmark array could not be decoded
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("unsupported landmark stride {0} (expected 2, 3 or 4)")]
    UnsupportedStride(usize),
    #[error("landmark data length {len} is not a multiple of stride {stride}")]
    RaggedData { len: usize, stride: usize },
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    ZeroCapacity(&'static str),
    #[error("movement thresholds must be ascending (slow < moderate < fast)")]
    UnorderedThresholds,
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f32 },
}

/// Handedness label other than "Left" or "Right"
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown handedness label: {0:?}")]
pub struct HandednessError(pub String);

impl From<LandmarkError> for JsValue {
    fn from(err: LandmarkError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
