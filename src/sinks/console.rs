//! Console sink implementation

use crate::core::{Channel, OutputSink, Result, SinkRecord};
#[cfg(feature = "console")]
use colored::Colorize;
use std::backtrace::Backtrace;
use std::io::Write;

pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Text followed by the auxiliary value as compact JSON, if any
    fn render(&self, record: &SinkRecord) -> String {
        let text = self.paint(record);
        match &record.auxiliary {
            Some(serde_json::Value::String(s)) => format!("{} {}", text, s),
            Some(value) => format!("{} {}", text, value),
            None => text,
        }
    }

    #[cfg(feature = "console")]
    fn paint(&self, record: &SinkRecord) -> String {
        match record.severity {
            Some(severity) if self.use_colors => {
                record.text.color(severity.color_code()).to_string()
            }
            _ => record.text.clone(),
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, record: &SinkRecord) -> String {
        record.text.clone()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&mut self, record: &SinkRecord) -> Result<()> {
        let output = self.render(record);

        // Warnings, errors and traces go to stderr, the rest to stdout
        match record.channel {
            Channel::Debug | Channel::Info => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", output)?;
            }
            Channel::Warn | Channel::Error => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", output)?;
            }
            Channel::Trace => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", output)?;
                writeln!(err, "{}", Backtrace::force_capture())?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
