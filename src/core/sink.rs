//! Output sink trait for console destinations

use super::error::Result;
use super::formatter::FormattedRecord;
use super::severity::Severity;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Severity-tagged entry point of an output sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    Debug,
    Info,
    Warn,
    Error,
    /// Stack-trace records from the error entry point
    Trace,
}

impl Channel {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Channel::Debug,
            Severity::Log => Channel::Info,
            Severity::Warning => Channel::Warn,
            Severity::Error => Channel::Error,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Channel::Debug => "debug",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Trace => "trace",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A single line handed to a sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SinkRecord {
    pub channel: Channel,
    /// Severity of the originating call; `None` for configuration notices
    pub severity: Option<Severity>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<Value>,
}

impl SinkRecord {
    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            channel: Channel::Info,
            severity: None,
            text: text.into(),
            auxiliary: None,
        }
    }

    pub fn trace(text: impl Into<String>) -> Self {
        Self {
            channel: Channel::Trace,
            severity: Some(Severity::Error),
            text: text.into(),
            auxiliary: None,
        }
    }
}

impl From<FormattedRecord> for SinkRecord {
    fn from(record: FormattedRecord) -> Self {
        Self {
            channel: Channel::for_severity(record.severity),
            severity: Some(record.severity),
            text: record.text,
            auxiliary: record.auxiliary,
        }
    }
}

pub trait OutputSink: Send {
    fn emit(&mut self, record: &SinkRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
