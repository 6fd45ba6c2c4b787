//! Flood risk assessment.
//!
//! Converts a weather observation into a `PredictionResult` in three pure
//! steps:
//! - `scoring`: per-factor band points, summed into a risk score.
//! - `classify`: maps the score onto a `RiskLevel`.
//! - `advice`: looks up the fixed recommendation list for that level.
//!
//! Nothing in here performs I/O or logs. Every finite or non-finite input
//! produces a result; values that match no band simply score zero.

pub mod advice;
pub mod classify;
pub mod scoring;

use crate::model::{PredictionResult, WeatherObservation};

pub use classify::classify_score;
pub use scoring::{score_breakdown, ScoreBreakdown, MAX_SCORE};

/// Scores three raw weather values and returns the classified result.
pub fn assess(rainfall_mm: f64, temperature_c: f64, humidity_pct: f64) -> PredictionResult {
    assess_observation(&WeatherObservation::new(rainfall_mm, temperature_c, humidity_pct))
}

/// Same as [`assess`] for an already-built observation.
pub fn assess_observation(observation: &WeatherObservation) -> PredictionResult {
    let risk_score = score_breakdown(observation).total();
    let risk_level = classify_score(risk_score);
    PredictionResult::new(risk_level, risk_score, advice::advice_for(risk_level))
}
