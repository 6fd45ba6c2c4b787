//! Safety recommendations per risk level.

use crate::model::RiskLevel;

const SEVERE_ADVICE: &[&str] = &[
    "⚠️ IMMEDIATE EVACUATION RECOMMENDED",
    "Move to higher ground immediately",
    "Avoid walking or driving through flood waters",
    "Keep emergency supplies ready (food, water, medicines)",
    "Stay tuned to local weather updates",
    "Contact local disaster management authorities",
];

const HIGH_ADVICE: &[&str] = &[
    "High flood risk detected - prepare for possible evacuation",
    "Move valuable items to higher floors",
    "Charge electronic devices and keep flashlights ready",
    "Avoid low-lying areas and river banks",
    "Keep important documents in waterproof containers",
    "Monitor weather forecasts regularly",
];

const MODERATE_ADVICE: &[&str] = &[
    "Moderate flood risk - stay alert",
    "Prepare emergency kit with essentials",
    "Clear drainage around your property",
    "Avoid unnecessary travel during heavy rain",
    "Keep emergency contact numbers handy",
    "Stay informed about weather conditions",
];

const LOW_ADVICE: &[&str] = &[
    "Low flood risk currently",
    "Continue normal activities with caution",
    "Keep basic emergency supplies ready",
    "Stay updated with weather forecasts",
    "Ensure proper drainage maintenance",
];

/// Fixed, ordered recommendation list for `level`.
pub fn advice_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Severe => SEVERE_ADVICE,
        RiskLevel::High => HIGH_ADVICE,
        RiskLevel::Moderate => MODERATE_ADVICE,
        RiskLevel::Low => LOW_ADVICE,
    }
}
