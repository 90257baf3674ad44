//! Message formatting
//!
//! Builds the printable line `{clock}[{Severity}][{tag}] {message}`.
//! The clock and tag segments are elided entirely when absent; the
//! severity segment is always present.

use super::severity::Severity;
use super::timestamp::TimestampStyle;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

/// An admitted call, ready for an output channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRecord {
    pub severity: Severity,
    pub text: String,
    /// Passed through unchanged when the caller supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<Value>,
}

impl FormattedRecord {
    /// Auxiliary value as printed next to the text; empty when none was given
    pub fn auxiliary_text(&self) -> String {
        match &self.auxiliary {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFormatter {
    style: TimestampStyle,
}

impl MessageFormatter {
    pub fn new(style: TimestampStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TimestampStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TimestampStyle) {
        self.style = style;
    }

    /// Format at the current wall-clock time
    pub fn format(
        &self,
        severity: Severity,
        message: &str,
        auxiliary: Option<Value>,
        tag: &str,
        show_timestamp: bool,
    ) -> FormattedRecord {
        self.format_at(severity, message, auxiliary, tag, show_timestamp, &Local::now())
    }

    pub fn format_at(
        &self,
        severity: Severity,
        message: &str,
        auxiliary: Option<Value>,
        tag: &str,
        show_timestamp: bool,
        at: &DateTime<Local>,
    ) -> FormattedRecord {
        let mut text = String::with_capacity(message.len() + tag.len() + 32);

        if show_timestamp {
            text.push_str(&self.style.render(at));
        }

        text.push('[');
        text.push_str(severity.to_str());
        text.push(']');

        if !tag.trim().is_empty() {
            text.push('[');
            text.push_str(tag);
            text.push(']');
        }

        text.push(' ');
        text.push_str(message);

        FormattedRecord {
            severity,
            text,
            auxiliary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 1, 14, 2, 9)
            .single()
            .expect("valid local time")
    }

    #[test]
    fn test_full_line() {
        let formatter = MessageFormatter::default();
        let record = formatter.format_at(Severity::Warning, "disk low", None, "fs", true, &at());
        assert_eq!(record.text, "14:2:9:0[Warning][fs] disk low");
        assert_eq!(record.auxiliary_text(), "");
    }

    #[test]
    fn test_elided_segments() {
        let formatter = MessageFormatter::default();
        let record = formatter.format_at(Severity::Log, "hello", None, "", false, &at());
        assert_eq!(record.text, "[Log] hello");
        assert!(!record.text.contains("  "));
        assert!(!record.text.contains("[]"));
    }

    #[test]
    fn test_blank_tag_is_elided_but_real_tag_printed_verbatim() {
        let formatter = MessageFormatter::default();
        let blank = formatter.format_at(Severity::Debug, "m", None, "   ", false, &at());
        assert_eq!(blank.text, "[Debug] m");

        let padded = formatter.format_at(Severity::Debug, "m", None, " net ", false, &at());
        assert_eq!(padded.text, "[Debug][ net ] m");
    }

    #[test]
    fn test_auxiliary_passthrough() {
        let formatter = MessageFormatter::default();
        let record = formatter.format_at(
            Severity::Error,
            "boom",
            Some(json!({"code": 7})),
            "",
            false,
            &at(),
        );
        assert_eq!(record.auxiliary, Some(json!({"code": 7})));
        assert_eq!(record.auxiliary_text(), "{\"code\":7}");
    }

    #[test]
    fn test_padded_style() {
        let formatter = MessageFormatter::new(TimestampStyle::PaddedClock);
        let record = formatter.format_at(Severity::Log, "x", None, "", true, &at());
        assert_eq!(record.text, "14:02:09:000[Log] x");
    }
}
