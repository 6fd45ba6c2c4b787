//! Band tables and per-factor scoring.
//!
//! Each factor is scored independently against its own table. Tables are
//! listed highest threshold first, and the first band whose threshold the
//! value strictly exceeds supplies the points. Bands of one factor never
//! accumulate.

use serde::Serialize;

use crate::model::WeatherObservation;

/// One row of a band table: values strictly above `above` earn `points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub above: f64,
    pub points: u8,
}

/// Rainfall over 24 hours, in mm.
pub const RAINFALL_BANDS: &[Band] = &[
    Band { above: 200.0, points: 40 },
    Band { above: 150.0, points: 30 },
    Band { above: 100.0, points: 20 },
    Band { above: 50.0, points: 10 },
];

/// Relative humidity, in percent.
pub const HUMIDITY_BANDS: &[Band] = &[
    Band { above: 85.0, points: 25 },
    Band { above: 70.0, points: 15 },
    Band { above: 50.0, points: 5 },
];

/// Air temperature, in °C.
pub const TEMPERATURE_BANDS: &[Band] = &[
    Band { above: 35.0, points: 15 },
    Band { above: 30.0, points: 10 },
];

/// Highest score the tables can produce (40 + 25 + 15).
pub const MAX_SCORE: u8 = 80;

/// Points earned by `value` under `bands`.
///
/// Returns 0 when no band matches, which includes NaN since every
/// comparison against NaN is false.
pub fn band_points(value: f64, bands: &[Band]) -> u8 {
    bands
        .iter()
        .find(|band| value > band.above)
        .map(|band| band.points)
        .unwrap_or(0)
}

/// Contribution of each factor to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub rainfall: u8,
    pub humidity: u8,
    pub temperature: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.rainfall
            .saturating_add(self.humidity)
            .saturating_add(self.temperature)
    }
}

pub fn score_breakdown(observation: &WeatherObservation) -> ScoreBreakdown {
    ScoreBreakdown {
        rainfall: band_points(observation.rainfall_mm, RAINFALL_BANDS),
        humidity: band_points(observation.humidity_pct, HUMIDITY_BANDS),
        temperature: band_points(observation.temperature_c, TEMPERATURE_BANDS),
    }
}
