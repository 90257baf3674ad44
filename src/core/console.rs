//! Console: severity entry points over the admission pipeline

use super::{
    call::{trace_line, LogCall},
    config::ConsoleConfig,
    duplicate::window_millis,
    error::Result,
    metrics::ConsoleMetrics,
    pipeline::{Admission, AdmissionPipeline, Rejection},
    severity::Severity,
    sink::{OutputSink, SinkRecord},
    tag_filter::ExclusionControl,
    timestamp::TimestampStyle,
};
use crate::sinks::ConsoleSink;
use std::time::Duration;

pub struct Console {
    pipeline: AdmissionPipeline,
    sinks: Vec<Box<dyn OutputSink>>,
    metrics: ConsoleMetrics,
    announce_changes: bool,
    notice_prefix: String,
}

impl Console {
    /// Console with the default configuration writing to stdout/stderr
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Console with no sinks attached
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            pipeline: AdmissionPipeline::from_config(config),
            sinks: Vec::new(),
            metrics: ConsoleMetrics::new(),
            announce_changes: config.announce_changes,
            notice_prefix: config.notice_prefix.clone(),
        }
    }

    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    pub fn add_sink(&mut self, sink: Box<dyn OutputSink>) {
        self.sinks.push(sink);
    }

    #[inline]
    pub fn debug(&mut self, call: impl Into<LogCall>) -> bool {
        self.emit_call(Severity::Debug, call.into())
    }

    #[inline]
    pub fn log(&mut self, call: impl Into<LogCall>) -> bool {
        self.emit_call(Severity::Log, call.into())
    }

    #[inline]
    pub fn warning(&mut self, call: impl Into<LogCall>) -> bool {
        self.emit_call(Severity::Warning, call.into())
    }

    /// Log at error severity. Unless the call opts out, a stack-trace record
    /// with a short message preview is emitted whether or not the call
    /// itself was admitted.
    pub fn error(&mut self, call: impl Into<LogCall>) -> bool {
        let call = call.into();
        let trace = call
            .stack_trace
            .then(|| trace_line(&call.tag, &call.message));

        let printed = self.emit_call(Severity::Error, call);

        if let Some(text) = trace {
            self.metrics.record_trace();
            self.dispatch(&SinkRecord::trace(text));
        }
        printed
    }

    /// Log at an arbitrary severity. Error-severity calls get the same
    /// stack-trace behaviour as [`Console::error`].
    pub fn log_at(&mut self, severity: Severity, call: impl Into<LogCall>) -> bool {
        match severity {
            Severity::Error => self.error(call),
            _ => self.emit_call(severity, call.into()),
        }
    }

    /// Run the admission pipeline without printing
    pub fn evaluate(&mut self, severity: Severity, call: impl Into<LogCall>) -> Admission {
        self.pipeline.evaluate(severity, call.into())
    }

    fn emit_call(&mut self, severity: Severity, call: LogCall) -> bool {
        match self.pipeline.evaluate(severity, call) {
            Admission::Accepted(record) => {
                self.metrics.record_admitted();
                self.dispatch(&SinkRecord::from(record));
                true
            }
            Admission::Rejected(reason) => {
                match reason {
                    Rejection::Tag => self.metrics.record_rejected_by_tag(),
                    Rejection::Level => self.metrics.record_rejected_by_level(),
                    Rejection::Duplicate => self.metrics.record_suppressed_duplicate(),
                };
                false
            }
        }
    }

    /// Hand a record to every sink, isolating each one from the others'
    /// errors and panics
    fn dispatch(&mut self, record: &SinkRecord) {
        for (idx, sink) in self.sinks.iter_mut().enumerate() {
            let emit_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.emit(record)));

            match emit_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[CONSOLE ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                    self.metrics.record_sink_failure();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[CONSOLE CRITICAL] Sink #{} panicked: {}. \
                         Other sinks continue to function.",
                        idx, panic_msg
                    );
                    self.metrics.record_sink_failure();
                }
            }
        }
    }

    /// Configuration notices bypass the pipeline entirely
    fn announce(&mut self, message: String) {
        if self.announce_changes {
            let text = format!("{} {}", self.notice_prefix, message);
            self.dispatch(&SinkRecord::notice(text));
        }
    }

    pub fn set_minimum_severity(&mut self, severity: Severity) {
        let effective = self.pipeline.level_mut().set_threshold(severity);
        self.announce(format!(
            "You updated minimum-logging-level to ({})",
            effective
        ));
    }

    pub fn minimum_severity(&self) -> Severity {
        self.pipeline.level().threshold()
    }

    pub fn set_show_timestamps(&mut self, enabled: bool) {
        self.pipeline.set_show_timestamps(enabled);
        self.announce(format!("You toggled show-timestamps to ({})", enabled));
    }

    pub fn show_timestamps(&self) -> bool {
        self.pipeline.show_timestamps()
    }

    pub fn set_timestamp_style(&mut self, style: TimestampStyle) {
        self.pipeline.formatter_mut().set_style(style);
    }

    pub fn set_duplicate_suppression(&mut self, enabled: bool) {
        self.pipeline.duplicates_mut().set_enabled(enabled);
        self.announce(format!("You updated anti-duplicate-logs to ({})", enabled));
    }

    pub fn duplicate_suppression(&self) -> bool {
        self.pipeline.duplicates().is_enabled()
    }

    /// Windows below one millisecond are raised to one millisecond.
    pub fn set_duplicate_window(&mut self, window: Duration) {
        self.pipeline.duplicates_mut().set_window(window);
    }

    pub fn add_include_tag(&mut self, tag: &str) {
        if self.pipeline.tags_mut().add_include(tag) {
            self.announce(format!("Added tag ({}) to include list", tag));
        }
    }

    pub fn remove_include_tag(&mut self, tag: &str) {
        if self.pipeline.tags_mut().remove_include(tag) {
            self.announce(format!("Removed tag ({}) from include list", tag));
        }
    }

    pub fn clear_include_tags(&mut self) {
        self.pipeline.tags_mut().clear_include();
        self.announce("You emptied include-tags".to_string());
    }

    pub fn include_tags(&self) -> Vec<String> {
        self.pipeline.tags().list_include()
    }

    pub fn add_exclude_tag(&mut self, tag: &str) {
        if self.pipeline.tags_mut().add_exclude(tag) {
            self.announce(format!("Added tag ({}) to exclude list", tag));
        }
    }

    pub fn remove_exclude_tag(&mut self, tag: &str) {
        if self.pipeline.tags_mut().remove_exclude(tag) {
            self.announce(format!("Removed tag ({}) from exclude list", tag));
        }
    }

    pub fn clear_exclude_tags(&mut self) {
        self.pipeline.tags_mut().clear_exclude();
        self.announce("You emptied exclude-tags".to_string());
    }

    pub fn exclude_tags(&self) -> Vec<String> {
        self.pipeline.tags().list_exclude()
    }

    pub fn set_announce_changes(&mut self, announce: bool) {
        self.announce_changes = announce;
    }

    pub fn pipeline(&self) -> &AdmissionPipeline {
        &self.pipeline
    }

    pub fn metrics(&self) -> &ConsoleMetrics {
        &self.metrics
    }

    pub fn flush(&mut self) -> Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[CONSOLE ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

impl ExclusionControl for Console {
    fn exclude_tag(&mut self, tag: &str) {
        self.add_exclude_tag(tag);
    }

    fn unexclude_tag(&mut self, tag: &str) {
        self.remove_exclude_tag(tag);
    }
}

/// Builder for constructing a Console with a fluent API
///
/// # Example
/// ```
/// use rust_console_filter::prelude::*;
///
/// let mut console = Console::builder()
///     .min_severity(Severity::Log)
///     .show_timestamps(false)
///     .exclude("noisy")
///     .sink(MemorySink::new())
///     .build();
///
/// assert!(!console.debug("hidden"));
/// assert!(console.log("shown"));
/// ```
pub struct ConsoleBuilder {
    config: ConsoleConfig,
    sinks: Vec<Box<dyn OutputSink>>,
}

impl ConsoleBuilder {
    pub fn new() -> Self {
        Self {
            config: ConsoleConfig::default(),
            sinks: Vec::new(),
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.config.min_severity = severity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_timestamps(mut self, enabled: bool) -> Self {
        self.config.show_timestamps = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_style(mut self, style: TimestampStyle) -> Self {
        self.config.timestamp_style = style;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include(mut self, tag: impl Into<String>) -> Self {
        self.config.include_tags.push(tag.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn exclude(mut self, tag: impl Into<String>) -> Self {
        self.config.exclude_tags.push(tag.into());
        self
    }

    /// Enable duplicate suppression with the given window, in whole
    /// milliseconds with a floor of one
    #[must_use = "builder methods return a new value"]
    pub fn duplicate_suppression(mut self, window: Duration) -> Self {
        self.config.duplicate_suppression.enabled = true;
        self.config.duplicate_suppression.window_ms = window_millis(window);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn announce_changes(mut self, announce: bool) -> Self {
        self.config.announce_changes = announce;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn notice_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.notice_prefix = prefix.into();
        self
    }

    /// Add a sink. Without any, the console writes to stdout/stderr.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: OutputSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Like [`build`](Self::build), but first runs
    /// [`ConsoleConfig::validate`] on the assembled configuration.
    pub fn try_build(self) -> Result<Console> {
        self.config.validate()?;
        Ok(self.build())
    }

    pub fn build(self) -> Console {
        let mut console = Console::from_config(&self.config);
        if self.sinks.is_empty() {
            console.add_sink(Box::new(ConsoleSink::with_colors(self.config.use_colors)));
        }
        for sink in self.sinks {
            console.add_sink(sink);
        }
        console
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
