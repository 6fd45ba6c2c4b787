//! Input validation ahead of the assessor.
//!
//! The assessor accepts any `f64` and quietly scores garbage as low risk, so
//! it cannot tell "the user typed nonsense" from "conditions are calm". This
//! module is the gate in front of it: raw form fields go in, and either a
//! `ValidatedObservation` or a `RejectionReason` comes out.
//!
//! Checks run in stages: region presence, presence of every number, parsing,
//! then finiteness and range. Within a stage fields go in form order
//! (rainfall, temperature, humidity). The first failure is reported, so an
//! unparsable temperature wins over an out-of-range rainfall.

use std::fmt;

use crate::model::WeatherObservation;

// ---------------------------------------------------------------------------
// Accepted ranges
// ---------------------------------------------------------------------------

/// Rainfall cannot be negative; no upper limit.
pub const RAINFALL_MIN_MM: f64 = 0.0;

/// Relative humidity is a percentage.
pub const HUMIDITY_MIN_PCT: f64 = 0.0;
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

/// Generous bounds around recorded surface air temperature extremes.
pub const TEMPERATURE_MIN_C: f64 = -90.0;
pub const TEMPERATURE_MAX_C: f64 = 60.0;

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// The input fields of an assessment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Region,
    Rainfall,
    Temperature,
    Humidity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Region => write!(f, "region"),
            Field::Rainfall => write!(f, "rainfall"),
            Field::Temperature => write!(f, "temperature"),
            Field::Humidity => write!(f, "humidity"),
        }
    }
}

/// Why raw input was refused before scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// The field was empty or whitespace.
    Missing(Field),
    /// The text is not a number.
    Unparsable { field: Field, input: String },
    /// The number parsed but is NaN or infinite.
    NonFinite(Field),
    /// The number is outside the physically plausible range.
    /// `max` is `None` for fields without an upper limit.
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: Option<f64>,
    },
}

impl RejectionReason {
    pub fn field(&self) -> Field {
        match self {
            RejectionReason::Missing(field) | RejectionReason::NonFinite(field) => *field,
            RejectionReason::Unparsable { field, .. } | RejectionReason::OutOfRange { field, .. } => {
                *field
            }
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::Missing(field) => write!(f, "{} is required", field),
            RejectionReason::Unparsable { field, input } => {
                write!(f, "{} must be a number, got '{}'", field, input)
            }
            RejectionReason::NonFinite(field) => write!(f, "{} must be a finite number", field),
            RejectionReason::OutOfRange {
                field,
                value,
                min,
                max: Some(max),
            } => write!(f, "{} {} is outside {}..={}", field, value, min, max),
            RejectionReason::OutOfRange {
                field,
                value,
                min,
                max: None,
            } => write!(f, "{} {} is below the minimum of {}", field, value, min),
        }
    }
}

impl std::error::Error for RejectionReason {}

// ---------------------------------------------------------------------------
// Validated input
// ---------------------------------------------------------------------------

/// An observation that passed validation, paired with its region label.
///
/// Only constructible through this module.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedObservation {
    region: String,
    observation: WeatherObservation,
}

impl ValidatedObservation {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn observation(&self) -> &WeatherObservation {
        &self.observation
    }

    pub fn into_parts(self) -> (String, WeatherObservation) {
        (self.region, self.observation)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validates the four raw text fields of an assessment request.
pub fn validate_fields(
    region: &str,
    rainfall: &str,
    temperature: &str,
    humidity: &str,
) -> Result<ValidatedObservation, RejectionReason> {
    let region = require_region(region)?;

    // Presence of every field is checked before any parsing, so an empty
    // humidity box is reported as missing even when rainfall is garbage.
    for (field, raw) in [
        (Field::Rainfall, rainfall),
        (Field::Temperature, temperature),
        (Field::Humidity, humidity),
    ] {
        if raw.trim().is_empty() {
            return Err(RejectionReason::Missing(field));
        }
    }

    let observation = WeatherObservation::new(
        parse_number(Field::Rainfall, rainfall)?,
        parse_number(Field::Temperature, temperature)?,
        parse_number(Field::Humidity, humidity)?,
    );

    validate_observation(&region, observation)
}

/// Validates already-numeric input. Applies the region, finiteness and range
/// checks of `validate_fields`.
pub fn validate_observation(
    region: &str,
    observation: WeatherObservation,
) -> Result<ValidatedObservation, RejectionReason> {
    let region = require_region(region)?;

    check_range(Field::Rainfall, observation.rainfall_mm, RAINFALL_MIN_MM, None)?;
    check_range(
        Field::Temperature,
        observation.temperature_c,
        TEMPERATURE_MIN_C,
        Some(TEMPERATURE_MAX_C),
    )?;
    check_range(
        Field::Humidity,
        observation.humidity_pct,
        HUMIDITY_MIN_PCT,
        Some(HUMIDITY_MAX_PCT),
    )?;

    Ok(ValidatedObservation {
        region,
        observation,
    })
}

fn require_region(region: &str) -> Result<String, RejectionReason> {
    let trimmed = region.trim();
    if trimmed.is_empty() {
        return Err(RejectionReason::Missing(Field::Region));
    }
    Ok(trimmed.to_string())
}

fn parse_number(field: Field, raw: &str) -> Result<f64, RejectionReason> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| RejectionReason::Unparsable {
            field,
            input: trimmed.to_string(),
        })
}

fn check_range(field: Field, value: f64, min: f64, max: Option<f64>) -> Result<(), RejectionReason> {
    if !value.is_finite() {
        return Err(RejectionReason::NonFinite(field));
    }
    let above_max = max.is_some_and(|max| value > max);
    if value < min || above_max {
        return Err(RejectionReason::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Accepted -----------------------------------------------------------

    #[test]
    fn test_valid_fields_produce_observation() {
        let validated = validate_fields("Kerala", "120", "32", "75").expect("valid input should pass");
        assert_eq!(validated.region(), "Kerala");
        assert_eq!(*validated.observation(), WeatherObservation::new(120.0, 32.0, 75.0));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let validated = validate_fields("  Assam ", " 55.5 ", "\t29", "80 ").expect("should trim");
        assert_eq!(validated.region(), "Assam");
        assert_eq!(validated.observation().rainfall_mm, 55.5);
    }

    #[test]
    fn test_range_edges_are_accepted() {
        assert!(validate_fields("Bihar", "0", "-90", "0").is_ok());
        assert!(validate_fields("Bihar", "9999", "60", "100").is_ok());
    }

    #[test]
    fn test_unknown_region_label_is_accepted() {
        // The label is free text; only emptiness is rejected.
        assert!(validate_fields("Somewhere Else", "10", "20", "30").is_ok());
    }

    // --- Missing ------------------------------------------------------------

    #[test]
    fn test_blank_region_is_missing() {
        assert_eq!(
            validate_fields("   ", "120", "32", "75"),
            Err(RejectionReason::Missing(Field::Region))
        );
    }

    #[test]
    fn test_blank_humidity_reported_before_bad_rainfall() {
        assert_eq!(
            validate_fields("Kerala", "abc", "32", ""),
            Err(RejectionReason::Missing(Field::Humidity))
        );
    }

    // --- Unparsable / non-finite --------------------------------------------

    #[test]
    fn test_garbage_is_unparsable() {
        let err = validate_fields("Kerala", "lots", "32", "75").unwrap_err();
        assert_eq!(
            err,
            RejectionReason::Unparsable {
                field: Field::Rainfall,
                input: "lots".to_string(),
            }
        );
        assert_eq!(err.to_string(), "rainfall must be a number, got 'lots'");
    }

    #[test]
    fn test_nan_and_infinity_are_non_finite() {
        assert_eq!(
            validate_fields("Kerala", "NaN", "32", "75"),
            Err(RejectionReason::NonFinite(Field::Rainfall))
        );
        assert_eq!(
            validate_fields("Kerala", "120", "inf", "75"),
            Err(RejectionReason::NonFinite(Field::Temperature))
        );
    }

    // --- Out of range -------------------------------------------------------

    #[test]
    fn test_parse_failure_reported_before_range_failure() {
        // Rainfall is out of range, but parsing runs as an earlier stage.
        assert_eq!(
            validate_fields("Kerala", "-5", "abc", "50"),
            Err(RejectionReason::Unparsable {
                field: Field::Temperature,
                input: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_negative_rainfall_is_out_of_range() {
        let err = validate_fields("Kerala", "-5", "32", "75").unwrap_err();
        assert_eq!(err.field(), Field::Rainfall);
        assert!(matches!(err, RejectionReason::OutOfRange { max: None, .. }));
    }

    #[test]
    fn test_humidity_above_100_is_out_of_range() {
        let err = validate_fields("Kerala", "120", "32", "101").unwrap_err();
        assert_eq!(
            err,
            RejectionReason::OutOfRange {
                field: Field::Humidity,
                value: 101.0,
                min: 0.0,
                max: Some(100.0),
            }
        );
        assert_eq!(err.to_string(), "humidity 101 is outside 0..=100");
    }

    #[test]
    fn test_implausible_temperature_is_out_of_range() {
        let err = validate_observation("Kerala", WeatherObservation::new(10.0, 75.0, 50.0)).unwrap_err();
        assert_eq!(err.field(), Field::Temperature);
    }

    #[test]
    fn test_into_parts_returns_trimmed_region() {
        let (region, obs) = validate_observation(" Odisha ", WeatherObservation::new(1.0, 2.0, 3.0))
            .expect("valid")
            .into_parts();
        assert_eq!(region, "Odisha");
        assert_eq!(obs.humidity_pct, 3.0);
    }
}
