//! CLI configuration loaded from environment variables.

use std::env;

use tienlen_rules::telemetry::LogFormat;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
    /// `EnvFilter` directives.
    pub log_filter: String,
}

impl CliConfig {
    /// Reads `RULES_LOG_FORMAT` (json | compact, default compact) and
    /// `RULES_LOG_FILTER` (falls back to `RUST_LOG`, then `info`).
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_format = match lookup("RULES_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => parse_log_format(&raw)?,
        };

        let log_filter = lookup("RULES_LOG_FILTER")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            log_format,
            log_filter,
        })
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, CliError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "compact" | "" => Ok(LogFormat::Compact),
        other => Err(CliError::config(format!(
            "RULES_LOG_FORMAT must be json or compact, got '{other}'"
        ))),
    }
}
