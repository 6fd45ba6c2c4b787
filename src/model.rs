/// Core data types for the FloodGuard risk assessor.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond trivial accessors and no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// The three weather values a flood-risk assessment is computed from.
///
/// No bounds are enforced here. The `validate` module is the place that
/// decides whether a set of values is physically plausible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Rainfall over the last 24 hours, in millimetres.
    pub rainfall_mm: f64,
    /// Air temperature, in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity, in percent.
    pub humidity_pct: f64,
}

impl WeatherObservation {
    pub fn new(rainfall_mm: f64, temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            rainfall_mm,
            temperature_c,
            humidity_pct,
        }
    }
}

// ---------------------------------------------------------------------------
// Risk levels
// ---------------------------------------------------------------------------

/// Flood risk categories, in ascending order of severity.
///
/// The derived ordering follows declaration order:
///   low < moderate < high < severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    /// Every level, lowest first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }

    /// Uppercase label used on the result banner.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Severe => "SEVERE",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of scoring one observation.
///
/// Fields are private so a result cannot be altered after the assessor
/// produces it; a new observation always yields a new result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    risk_level: RiskLevel,
    risk_score: u8,
    advice: &'static [&'static str],
}

impl PredictionResult {
    pub(crate) fn new(risk_level: RiskLevel, risk_score: u8, advice: &'static [&'static str]) -> Self {
        Self {
            risk_level,
            risk_score,
            advice,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Summed band points, always within `0..=risk::MAX_SCORE`.
    pub fn risk_score(&self) -> u8 {
        self.risk_score
    }

    pub fn advice(&self) -> &'static [&'static str] {
        self.advice
    }
}

/// A scored observation together with the context the display layer shows
/// alongside it. The region is carried for display only and never influences
/// the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub region: String,
    pub observation: WeatherObservation,
    pub result: PredictionResult,
    pub assessed_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the layers around the assessor (config, output, input).
/// The assessor itself is total and never fails.
#[derive(Debug, PartialEq)]
pub enum FloodGuardError {
    /// A configuration file could not be read or parsed.
    Config(String),
    /// Writing output or a log file failed.
    Io(String),
    /// The assessment could not be serialized.
    Serialization(String),
    /// Raw input was rejected before reaching the assessor.
    Rejected(crate::validate::RejectionReason),
}

impl fmt::Display for FloodGuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloodGuardError::Config(msg) => write!(f, "Config error: {}", msg),
            FloodGuardError::Io(msg) => write!(f, "IO error: {}", msg),
            FloodGuardError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            FloodGuardError::Rejected(reason) => write!(f, "Invalid input: {}", reason),
        }
    }
}

impl std::error::Error for FloodGuardError {}

impl From<crate::validate::RejectionReason> for FloodGuardError {
    fn from(reason: crate::validate::RejectionReason) -> Self {
        FloodGuardError::Rejected(reason)
    }
}

impl From<std::io::Error> for FloodGuardError {
    fn from(err: std::io::Error) -> Self {
        FloodGuardError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FloodGuardError {
    fn from(err: serde_json::Error) -> Self {
        FloodGuardError::Serialization(err.to_string())
    }
}
