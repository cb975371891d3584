//! CLI error type. Every failure is printed as a problem-style JSON object
//! on stderr and mapped to a non-zero exit status.

use serde::Serialize;
use thiserror::Error;
use tienlen_rules::errors::DomainError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {detail}")]
    Io {
        detail: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON: {detail}")]
    Json {
        detail: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cannot encode response: {detail}")]
    Encode {
        detail: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Wire shape of a reported error.
#[derive(Debug, Serialize)]
pub struct Problem {
    pub code: &'static str,
    pub detail: String,
}

impl CliError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode {
            detail: source.to_string(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "MALFORMED_JSON",
            Self::Encode { .. } => "ENCODE_RESPONSE",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Domain(err) => err.code().as_str(),
        }
    }

    pub fn problem(&self) -> Problem {
        let detail = match self {
            Self::Domain(err) => err.detail().to_string(),
            other => other.to_string(),
        };
        Problem {
            code: self.code(),
            detail,
        }
    }

    /// 2 for usage and configuration problems, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            _ => 1,
        }
    }
}
