//! Admission pipeline
//!
//! Decides, for each call, whether it is printed and in what shape. A call
//! must pass the tag filter and the level gate; when duplicate suppression
//! is enabled it must also pass that stage.
//!
//! The tag filter and level gate have no side effects, while the duplicate
//! stage records every message it lets through. The pure gates therefore
//! run first: were the duplicate check first, a call later refused by tag
//! or level would still be recorded and would silently suppress an
//! identical, admissible call arriving inside the window.

use super::call::LogCall;
use super::config::ConsoleConfig;
use super::duplicate::DuplicateSuppressor;
use super::formatter::{FormattedRecord, MessageFormatter};
use super::level_gate::LevelGate;
use super::severity::Severity;
use super::tag_filter::{TagFilter, TagSet};
use chrono::{DateTime, Local};
use std::time::Instant;

/// Which gate refused a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Tag,
    Level,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Accepted(FormattedRecord),
    Rejected(Rejection),
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted(_))
    }

    pub fn record(&self) -> Option<&FormattedRecord> {
        match self {
            Admission::Accepted(record) => Some(record),
            Admission::Rejected(_) => None,
        }
    }

    pub fn into_record(self) -> Option<FormattedRecord> {
        match self {
            Admission::Accepted(record) => Some(record),
            Admission::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdmissionPipeline {
    tags: TagFilter,
    level: LevelGate,
    duplicates: DuplicateSuppressor,
    formatter: MessageFormatter,
    show_timestamps: bool,
}

impl AdmissionPipeline {
    /// Pipeline with the default configuration: everything admitted,
    /// timestamps on, duplicate suppression off
    pub fn new() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        let include: TagSet = config.include_tags.iter().cloned().collect();
        let exclude: TagSet = config.exclude_tags.iter().cloned().collect();
        Self {
            tags: TagFilter::with_lists(include, exclude),
            level: LevelGate::new(config.min_severity),
            duplicates: DuplicateSuppressor::new(config.duplicate_suppression),
            formatter: MessageFormatter::new(config.timestamp_style.clone()),
            show_timestamps: config.show_timestamps,
        }
    }

    pub fn evaluate(&mut self, severity: Severity, call: LogCall) -> Admission {
        self.evaluate_at(severity, call, Instant::now(), &Local::now())
    }

    /// Evaluate against explicit clocks: `now` drives the duplicate window,
    /// `wall` is the rendered time of day.
    pub fn evaluate_at(
        &mut self,
        severity: Severity,
        call: LogCall,
        now: Instant,
        wall: &DateTime<Local>,
    ) -> Admission {
        // Duplicate check last: only calls that will print enter its history.
        if !self.tags.admit(&call.tag) {
            return Admission::Rejected(Rejection::Tag);
        }
        if !self.level.admit(severity) {
            return Admission::Rejected(Rejection::Level);
        }
        if !self.duplicates.check(&call.message, now) {
            return Admission::Rejected(Rejection::Duplicate);
        }

        Admission::Accepted(self.formatter.format_at(
            severity,
            &call.message,
            call.auxiliary,
            &call.tag,
            self.show_timestamps,
            wall,
        ))
    }

    pub fn tags(&self) -> &TagFilter {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagFilter {
        &mut self.tags
    }

    pub fn level(&self) -> &LevelGate {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut LevelGate {
        &mut self.level
    }

    pub fn duplicates(&self) -> &DuplicateSuppressor {
        &self.duplicates
    }

    pub fn duplicates_mut(&mut self) -> &mut DuplicateSuppressor {
        &mut self.duplicates
    }

    pub fn formatter_mut(&mut self) -> &mut MessageFormatter {
        &mut self.formatter
    }

    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    pub fn set_show_timestamps(&mut self, enabled: bool) {
        self.show_timestamps = enabled;
    }
}

impl Default for AdmissionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::duplicate::DuplicateConfig;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_default_log_is_admitted_with_timestamp() {
        let mut pipeline = AdmissionPipeline::new();
        let record = pipeline
            .evaluate(Severity::Log, LogCall::new("hello"))
            .into_record()
            .expect("admitted");

        assert!(record.text.ends_with("[Log] hello"));
        assert!(!record.text.starts_with('['));
        assert_eq!(record.auxiliary_text(), "");
    }

    #[test]
    fn test_tag_rejection() {
        let mut pipeline = AdmissionPipeline::new();
        pipeline.tags_mut().add_exclude("db");
        let admission = pipeline.evaluate(Severity::Error, LogCall::new("q").tag("db"));
        assert_eq!(admission, Admission::Rejected(Rejection::Tag));
    }

    #[test]
    fn test_level_rejection() {
        let mut pipeline = AdmissionPipeline::new();
        pipeline.level_mut().set_threshold(Severity::Warning);
        let admission = pipeline.evaluate(Severity::Log, LogCall::new("q"));
        assert_eq!(admission, Admission::Rejected(Rejection::Level));
        assert!(pipeline.evaluate(Severity::Warning, LogCall::new("q")).is_accepted());
    }

    #[test]
    fn test_duplicate_rejection_only_when_enabled() {
        let mut pipeline = AdmissionPipeline::new();
        let t0 = Instant::now();
        let wall = Local::now();
        assert!(pipeline
            .evaluate_at(Severity::Log, LogCall::new("same"), t0, &wall)
            .is_accepted());
        assert!(pipeline
            .evaluate_at(Severity::Log, LogCall::new("same"), t0, &wall)
            .is_accepted());

        pipeline.duplicates_mut().set_enabled(true);
        assert!(pipeline
            .evaluate_at(Severity::Log, LogCall::new("same"), t0, &wall)
            .is_accepted());
        assert_eq!(
            pipeline.evaluate_at(
                Severity::Log,
                LogCall::new("same"),
                t0 + Duration::from_millis(10),
                &wall
            ),
            Admission::Rejected(Rejection::Duplicate)
        );
    }

    #[test]
    fn test_refused_call_does_not_enter_duplicate_history() {
        let config = ConsoleConfig {
            min_severity: Severity::Warning,
            duplicate_suppression: DuplicateConfig::enabled(),
            ..Default::default()
        };
        let mut pipeline = AdmissionPipeline::from_config(&config);
        let t0 = Instant::now();
        let wall = Local::now();

        let admission = pipeline.evaluate_at(Severity::Debug, LogCall::new("m"), t0, &wall);
        assert_eq!(admission, Admission::Rejected(Rejection::Level));
        assert_eq!(pipeline.duplicates().history_len(), 0);

        assert!(pipeline
            .evaluate_at(Severity::Error, LogCall::new("m"), t0, &wall)
            .is_accepted());
    }

    #[test]
    fn test_tag_refused_call_does_not_enter_duplicate_history() {
        let mut pipeline = AdmissionPipeline::new();
        pipeline.duplicates_mut().set_enabled(true);
        pipeline.tags_mut().add_exclude("db");
        let t0 = Instant::now();
        let wall = Local::now();

        let admission = pipeline.evaluate_at(Severity::Log, LogCall::new("m").tag("db"), t0, &wall);
        assert_eq!(admission, Admission::Rejected(Rejection::Tag));
        assert_eq!(pipeline.duplicates().history_len(), 0);
        assert!(pipeline
            .evaluate_at(Severity::Log, LogCall::new("m").tag("net"), t0, &wall)
            .is_accepted());
    }

    #[test]
    fn test_timestamps_off() {
        let mut pipeline = AdmissionPipeline::new();
        pipeline.set_show_timestamps(false);
        let record = pipeline
            .evaluate(
                Severity::Debug,
                LogCall::new("payload").auxiliary(json!({"x": 1})),
            )
            .into_record()
            .unwrap();
        assert_eq!(record.text, "[Debug] payload");
        assert_eq!(record.auxiliary, Some(json!({"x": 1})));
    }

    #[test]
    fn test_from_config_lists() {
        let config = ConsoleConfig {
            include_tags: vec!["only".to_string()],
            exclude_tags: vec!["only".to_string()],
            ..Default::default()
        };
        let mut pipeline = AdmissionPipeline::from_config(&config);
        assert!(pipeline
            .evaluate(Severity::Log, LogCall::new("a").tag("only"))
            .is_accepted());
        assert_eq!(
            pipeline.evaluate(Severity::Log, LogCall::new("a")),
            Admission::Rejected(Rejection::Tag)
        );
    }
}
