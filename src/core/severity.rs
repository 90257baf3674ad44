//! Severity definitions

use super::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered importance of a log call. Comparison is by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Debug = 0,
    Log = 1,
    Warning = 2,
    Error = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Log,
        Severity::Warning,
        Severity::Error,
    ];

    /// Display name rendered inside the bracketed severity segment
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Log => "Log",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => Blue,
            Severity::Log => Green,
            Severity::Warning => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "LOG" | "INFO" => Ok(Severity::Log),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            _ => Err(ConsoleError::InvalidSeverity(s.to_string())),
        }
    }
}
