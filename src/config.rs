//! Runtime configuration.
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! [logging]
//! level = "info"          # debug | info | warn | error
//! file = "floodguard.log" # optional
//! timestamps = false
//!
//! [output]
//! format = "text"         # text | json
//! color = true
//! explain = false
//! ```
//!
//! The file is located through the `--config` flag, else the
//! `FLOODGUARD_CONFIG` environment variable (which may be set in `.env`).
//! With neither, built-in defaults apply. Every key is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logging::LogLevel;
use crate::model::FloodGuardError;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "FLOODGUARD_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warning,
            file: None,
            timestamps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// ANSI severity colors in text output.
    pub color: bool,
    /// Show per-factor points under the score.
    pub explain: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            explain: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, FloodGuardError> {
        toml::from_str(contents).map_err(|e| FloodGuardError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, FloodGuardError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FloodGuardError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| FloodGuardError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads from `explicit` if given, else from the path in
    /// `FLOODGUARD_CONFIG`, else returns defaults. A path that was asked for
    /// but cannot be read is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, FloodGuardError> {
        match resolve_path(explicit, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }
}

fn resolve_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }

    #[test]
    fn test_full_file_parses() {
        let config = Config::from_toml_str(
            r#"
            [logging]
            level = "debug"
            file = "/tmp/floodguard.log"
            timestamps = true

            [output]
            format = "json"
            color = false
            explain = true
            "#,
        )
        .expect("full config should parse");

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/floodguard.log"));
        assert!(config.logging.timestamps);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.output.explain);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str("[output]\nexplain = true\n").expect("should parse");
        assert!(config.output.explain);
        assert!(config.output.color);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml_str("[output]\ndenominator = 100\n").unwrap_err();
        assert!(matches!(err, FloodGuardError::Config(_)));
    }

    #[test]
    fn test_bad_level_is_rejected() {
        assert!(Config::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[output]\nformat = \"json\"").expect("write config");
        let config = Config::from_file(file.path()).expect("file should load");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::from_file(Path::new("/nonexistent/floodguard.toml")).unwrap_err();
        match err {
            FloodGuardError::Config(msg) => assert!(msg.contains("/nonexistent/floodguard.toml")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let resolved = resolve_path(Some(Path::new("a.toml")), Some(PathBuf::from("b.toml")));
        assert_eq!(resolved, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_env_path_used_when_no_flag() {
        assert_eq!(resolve_path(None, Some(PathBuf::from("b.toml"))), Some(PathBuf::from("b.toml")));
        assert_eq!(resolve_path(None, Some(PathBuf::new())), None);
        assert_eq!(resolve_path(None, None), None);
    }
}
