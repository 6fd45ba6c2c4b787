//! Pairs a validated observation with its result for the display layer.
//!
//! # Clock injection
//! `assess_validated_at` takes `now` explicitly so tests stay deterministic;
//! `assess_validated` is the wrapper that reads the real clock.

use chrono::{DateTime, Utc};

use crate::model::Assessment;
use crate::risk::assess_observation;
use crate::validate::ValidatedObservation;

/// Scores `validated` and stamps the result with `now`. The region is copied
/// onto the assessment untouched; it plays no part in the score.
pub fn assess_validated_at(validated: ValidatedObservation, now: DateTime<Utc>) -> Assessment {
    let (region, observation) = validated.into_parts();
    Assessment {
        region,
        result: assess_observation(&observation),
        observation,
        assessed_at: now,
    }
}

/// Convenience wrapper that uses the real current time.
pub fn assess_validated(validated: ValidatedObservation) -> Assessment {
    assess_validated_at(validated, Utc::now())
}
