/// Structured logging for the FloodGuard assessor
///
/// Provides leveled log lines tagged with the component that emitted them
/// and, where relevant, the region being assessed. Supports console output
/// and appending to a log file.
///
/// The risk core never logs; only the layers around it do.

use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::model::Assessment;
use crate::validate::RejectionReason;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Cli,
    Config,
    Validation,
    Assessor,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Cli => write!(f, "CLI"),
            Component::Config => write!(f, "CFG"),
            Component::Validation => write!(f, "VAL"),
            Component::Assessor => write!(f, "RISK"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn log(&self, level: LogLevel, component: Component, region: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = format_entry(level, component, region, message);
        let region_part = region.map(|r| format!(" [{}]", r)).unwrap_or_default();

        // Console output goes to stderr so stdout carries only the report.
        if self.console_timestamps {
            eprintln!("{}", log_entry);
        } else {
            match level {
                LogLevel::Error => eprintln!("✗ {}{}: {}", component, region_part, message),
                LogLevel::Warning => eprintln!("⚠ {}{}: {}", component, region_part, message),
                LogLevel::Info => eprintln!("  {}", message),
                LogLevel::Debug => eprintln!("  [DEBUG] {}", message),
            }
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

/// Full log line: `<timestamp> <LEVEL> <COMPONENT>[ [region]]: <message>`
fn format_entry(level: LogLevel, component: Component, region: Option<&str>, message: &str) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let region_part = region.map(|r| format!(" [{}]", r)).unwrap_or_default();
    format!("{} {} {}{}: {}", timestamp, level, component, region_part, message)
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn dispatch(level: LogLevel, component: Component, region: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, region, message);
        }
    }
}

/// Log a general informational message
pub fn info(component: Component, region: Option<&str>, message: &str) {
    dispatch(LogLevel::Info, component, region, message);
}

/// Log a warning message
pub fn warn(component: Component, region: Option<&str>, message: &str) {
    dispatch(LogLevel::Warning, component, region, message);
}

/// Log an error message
pub fn error(component: Component, region: Option<&str>, message: &str) {
    dispatch(LogLevel::Error, component, region, message);
}

/// Log a debug message
pub fn debug(component: Component, region: Option<&str>, message: &str) {
    dispatch(LogLevel::Debug, component, region, message);
}

// ---------------------------------------------------------------------------
// Structured Helpers
// ---------------------------------------------------------------------------

/// Log input that was refused before scoring. Recorded at debug level: the
/// CLI already tells the user why, so this only shows up when asked for.
pub fn log_rejection(region: Option<&str>, reason: &RejectionReason) {
    debug(Component::Validation, region, &rejection_message(reason));
}

fn rejection_message(reason: &RejectionReason) -> String {
    format!("Rejected {} input: {}", reason.field(), reason)
}

/// Log a completed assessment. Severe results are raised to warnings so
/// they stand out in a log file.
pub fn log_assessment(assessment: &Assessment) {
    let obs = &assessment.observation;
    let message = format!(
        "rain={}mm temp={}°C humidity={}% -> score {} ({})",
        obs.rainfall_mm,
        obs.temperature_c,
        obs.humidity_pct,
        assessment.result.risk_score(),
        assessment.result.risk_level()
    );

    let region = Some(assessment.region.as_str());
    match assessment.result.risk_level() {
        crate::model::RiskLevel::Severe => warn(Component::Assessor, region, &message),
        _ => info(Component::Assessor, region, &message),
    }
}
