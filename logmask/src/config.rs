// logmask/src/config.rs
//! Logger configuration.
//!
//! `LoggerConfig` is the explicit configuration object handed to
//! [`crate::logger::init`]; there is no package-level singleton state.
//!
//! License: MIT OR APACHE 2.0

use log::LevelFilter;
use serde::Deserialize;

/// Record encoding for the assembled pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Tab-separated human-readable records.
    #[default]
    Console,
    /// One JSON object per record.
    Json,
}

/// Configuration for the logging pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Minimum level emitted: "trace", "debug", "info", "warn", "error" or
    /// "off". Unrecognized values fall back to "info".
    pub level: String,
    /// Record encoding: "console" or "json".
    pub encoding: Encoding,
    /// Operator redaction specs, each `"pattern==>replacement"`. When any
    /// spec survives parsing, the resulting chain replaces the built-in
    /// default chain; when the list is empty (or every spec is skipped)
    /// the defaults apply.
    pub filter_specs: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            encoding: Encoding::Console,
            filter_specs: Vec::new(),
        }
    }
}

/// Maps a level string to a `log::LevelFilter`, defaulting to `Info` for
/// anything unrecognized.
pub fn level_filter(level: &str) -> LevelFilter {
    match level {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}
