//! Score → risk level thresholds.

use crate::model::RiskLevel;

/// Minimum score for each elevated level, highest first.
pub const LEVEL_THRESHOLDS: [(u8, RiskLevel); 3] = [
    (70, RiskLevel::Severe),
    (50, RiskLevel::High),
    (30, RiskLevel::Moderate),
];

/// Maps a risk score to its level. Scores below every threshold are low.
pub fn classify_score(score: u8) -> RiskLevel {
    LEVEL_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::Low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_score(0), RiskLevel::Low);
        assert_eq!(classify_score(29), RiskLevel::Low);
        assert_eq!(classify_score(30), RiskLevel::Moderate);
        assert_eq!(classify_score(49), RiskLevel::Moderate);
        assert_eq!(classify_score(50), RiskLevel::High);
        assert_eq!(classify_score(69), RiskLevel::High);
        assert_eq!(classify_score(70), RiskLevel::Severe);
        assert_eq!(classify_score(80), RiskLevel::Severe);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut previous = RiskLevel::Low;
        for score in 0..=u8::MAX {
            let level = classify_score(score);
            assert!(level >= previous, "level dropped at score {score}");
            previous = level;
        }
    }
}
