//! Running-training calculator core.
//!
//! Given two of distance, total time and pace, derives the third, splits the
//! distance into track laps, and runs independent run/rest interval timers.

use log::debug;
use wasm_bindgen::prelude::*;

pub mod clock;
pub mod collection;
pub mod config;
pub mod derivation;
pub mod duration;
pub mod laps;
pub mod report;
pub mod timer;
pub mod utils;

pub use collection::TimerGroupCollection;
pub use derivation::{derive, Derivation, Field, TrainingInputs};
pub use duration::{format_duration, format_pace, parse_duration, parse_duration_secs};
pub use laps::{compute_splits, LapSplit, LapSummary};
pub use report::TrainingReport;
pub use timer::{GroupId, Phase, TimerGroup, TimerMode, TimerSegment};

/// JavaScript entry point for computing a full report from raw field text.
///
/// # Arguments
/// * `distance` - Distance text in meters
/// * `time` - Total time text (hh:mm:ss, mm:ss, or bare minutes)
/// * `pace` - Pace text per kilometer, same formats as `time`
/// * `lap_length` - Track length in meters; unusable values fall back to 400
///
/// # Returns
/// Serialized [`TrainingReport`] with camelCase fields, or an error string
#[wasm_bindgen(js_name = computeTrainingReport)]
pub fn compute_training_report(distance: &str, time: &str, pace: &str, lap_length: f64) -> JsValue {
    let report = TrainingReport::from_text(distance, time, pace, lap_length);
    debug!(
        "Report: calculated {:?}, {} splits",
        report.highlighted(),
        report.splits.len()
    );
    match serde_wasm_bindgen::to_value(&report) {
        Ok(value) => value,
        Err(e) => serde_wasm_bindgen::to_value(&format!("Failed to serialize report: {}", e))
            .unwrap_or(JsValue::NULL),
    }
}
