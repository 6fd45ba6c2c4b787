//! FloodGuard: rule-based flood risk assessment from rainfall, temperature
//! and humidity readings.
//!
//! The scoring core lives in [`risk`] and is a pure, total function. Raw
//! input passes through [`validate`] first; [`report`] renders the outcome.

pub mod assessment;
pub mod config;
pub mod logging;
pub mod model;
pub mod regions;
pub mod report;
pub mod risk;
pub mod validate;

pub use model::{Assessment, FloodGuardError, PredictionResult, RiskLevel, WeatherObservation};
pub use risk::{assess, assess_observation, MAX_SCORE};
