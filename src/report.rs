//! Rendering of assessments for display.
//!
//! Text output is laid out like a result card: region line,
//! uppercase level banner colored by severity, score line, then the advice
//! as a bulleted list. The score is shown out of `MAX_SCORE` (80), which is
//! the real ceiling of the band tables.

use serde::Serialize;
use std::fmt::Write;

use crate::model::{Assessment, FloodGuardError, RiskLevel, WeatherObservation};
use crate::risk::{score_breakdown, ScoreBreakdown, MAX_SCORE};

// ---------------------------------------------------------------------------
// Severity colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityColor {
    Green,
    Yellow,
    Orange,
    /// Destructive styling, reserved for severe risk.
    Red,
}

impl SeverityColor {
    fn ansi(&self) -> &'static str {
        match self {
            SeverityColor::Green => "\x1b[1;32m",
            SeverityColor::Yellow => "\x1b[1;33m",
            SeverityColor::Orange => "\x1b[1;38;5;208m",
            SeverityColor::Red => "\x1b[1;31m",
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

pub fn severity_color(level: RiskLevel) -> SeverityColor {
    match level {
        RiskLevel::Low => SeverityColor::Green,
        RiskLevel::Moderate => SeverityColor::Yellow,
        RiskLevel::High => SeverityColor::Orange,
        RiskLevel::Severe => SeverityColor::Red,
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub explain: bool,
}

/// Colors are used only when the config allows them, `--no-color` was not
/// given, and stdout is a terminal.
pub fn color_enabled(configured: bool, disabled: bool, is_terminal: bool) -> bool {
    configured && !disabled && is_terminal
}

pub fn score_line(score: u8) -> String {
    format!("Risk Score: {}/{}", score, MAX_SCORE)
}

pub fn render_text(assessment: &Assessment, options: RenderOptions) -> String {
    let level = assessment.result.risk_level();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Region: {}", assessment.region);
    if options.color {
        let _ = writeln!(
            out,
            "Risk Level: {}{}{}",
            severity_color(level).ansi(),
            level.label(),
            ANSI_RESET
        );
    } else {
        let _ = writeln!(out, "Risk Level: {}", level.label());
    }
    let _ = writeln!(out, "{}", score_line(assessment.result.risk_score()));

    if options.explain {
        let breakdown = score_breakdown(&assessment.observation);
        let _ = writeln!(out, "  rainfall     {:>2}", breakdown.rainfall);
        let _ = writeln!(out, "  humidity     {:>2}", breakdown.humidity);
        let _ = writeln!(out, "  temperature  {:>2}", breakdown.temperature);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Safety Recommendations");
    for item in assessment.result.advice() {
        let _ = writeln!(out, "• {}", item);
    }
    out
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonReport<'a> {
    region: &'a str,
    assessed_at: String,
    observation: &'a WeatherObservation,
    risk_level: RiskLevel,
    risk_score: u8,
    max_score: u8,
    breakdown: ScoreBreakdown,
    advice: &'static [&'static str],
}

pub fn render_json(assessment: &Assessment) -> Result<String, FloodGuardError> {
    let report = JsonReport {
        region: &assessment.region,
        assessed_at: assessment.assessed_at.to_rfc3339(),
        observation: &assessment.observation,
        risk_level: assessment.result.risk_level(),
        risk_score: assessment.result.risk_score(),
        max_score: MAX_SCORE,
        breakdown: score_breakdown(&assessment.observation),
        advice: assessment.result.advice(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
