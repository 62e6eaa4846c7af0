//! Error types
//!
//! An invalid bracket sequence is a normal trace outcome and never shows up
//! here. These errors cover the surrounding plumbing: rejecting foreign
//! characters, navigating past either end of a replay, loading configuration
//! and fetching explanations.

use std::path::PathBuf;
use thiserror::Error;

/// Input contained something other than the six bracket characters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid character '{ch}' at position {position}: only ()[]{{}} are allowed")]
    InvalidCharacter { ch: char, position: usize },
}

/// Replay cursor could not move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("Already at the first step")]
    AtStart,

    #[error("Already at the last step")]
    AtEnd,

    #[error("Trace has no steps")]
    Empty,
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Explanation request failed
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unreadable response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no text")]
    EmptyResponse,
}
