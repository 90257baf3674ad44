//! Console configuration
//!
//! A [`ConsoleConfig`] captures every knob of the admission pipeline and
//! can be loaded from JSON. Missing fields take their defaults:
//!
//! ```
//! use rust_console_filter::{ConsoleConfig, Severity};
//!
//! let config = ConsoleConfig::from_json_str(r#"{
//!     "min_severity": "Warning",
//!     "exclude_tags": ["noisy"]
//! }"#).unwrap();
//!
//! assert_eq!(config.min_severity, Severity::Warning);
//! assert!(config.show_timestamps);
//! assert!(!config.duplicate_suppression.enabled);
//! ```

use super::duplicate::DuplicateConfig;
use super::error::{ConsoleError, Result};
use super::severity::Severity;
use super::timestamp::TimestampStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NOTICE_PREFIX: &str = "[Console]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub min_severity: Severity,
    pub show_timestamps: bool,
    pub timestamp_style: TimestampStyle,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub duplicate_suppression: DuplicateConfig,
    /// Emit a notice on the info channel for every configuration change
    pub announce_changes: bool,
    pub notice_prefix: String,
    pub use_colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Debug,
            show_timestamps: true,
            timestamp_style: TimestampStyle::default(),
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
            duplicate_suppression: DuplicateConfig::default(),
            announce_changes: true,
            notice_prefix: DEFAULT_NOTICE_PREFIX.to_string(),
            use_colors: true,
        }
    }
}

impl ConsoleConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ConsoleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConsoleError::io_operation("reading console config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duplicate_suppression.window_ms == 0 {
            return Err(ConsoleError::config(
                "duplicate_suppression",
                "window_ms must be greater than zero",
            ));
        }
        if let TimestampStyle::Custom(format_str) = &self.timestamp_style {
            if format_str.is_empty() {
                return Err(ConsoleError::config(
                    "timestamp_style",
                    "custom format must not be empty",
                ));
            }
        }
        if !self.timestamp_style.is_renderable() {
            return Err(ConsoleError::config(
                "timestamp_style",
                "custom format contains an unknown strftime specifier",
            ));
        }
        Ok(())
    }
}
