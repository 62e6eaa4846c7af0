//! Processing discipline for the working buffer

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which end of the buffer a closer removes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Last-In First-Out: remove the most recently pushed opener
    #[default]
    Stack,
    /// First-In First-Out: remove the oldest opener still present
    Queue,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Stack => "stack",
            Mode::Queue => "queue",
        }
    }

    pub fn acronym(self) -> &'static str {
        match self {
            Mode::Stack => "LIFO",
            Mode::Queue => "FIFO",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Mode::Stack => "Last-In First-Out",
            Mode::Queue => "First-In First-Out",
        }
    }

    /// Name of the end a removal reads from
    pub fn removal_end(self) -> &'static str {
        match self {
            Mode::Stack => "Top",
            Mode::Queue => "Front",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Stack => Mode::Queue,
            Mode::Queue => Mode::Stack,
        }
    }

    /// "Stack" / "Queue"
    pub fn capitalized(self) -> &'static str {
        match self {
            Mode::Stack => "Stack",
            Mode::Queue => "Queue",
        }
    }

    /// "STACK" / "QUEUE"
    pub fn upper(self) -> &'static str {
        match self {
            Mode::Stack => "STACK",
            Mode::Queue => "QUEUE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" | "lifo" => Ok(Mode::Stack),
            "queue" | "fifo" => Ok(Mode::Queue),
            other => Err(ConfigError::InvalidValue {
                key: "mode".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
