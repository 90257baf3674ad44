//! Arguments of a single logging call
//!
//! [`LogCall`] is the typed call shape: message, an optional auxiliary
//! payload, a tag, and (for errors) whether to emit a stack-trace record.
//! [`LogCall::positional`] accepts the legacy shorthand where payload and
//! tag may be given in either order.

use serde_json::Value;

/// Longest message preview shown in a stack-trace record
pub const TRACE_PREVIEW_CHARS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct LogCall {
    pub message: String,
    /// `None` means the caller supplied no payload; nothing extra is printed
    pub auxiliary: Option<Value>,
    pub tag: String,
    /// Only consulted by the error entry point
    pub stack_trace: bool,
}

impl LogCall {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            auxiliary: None,
            tag: String::new(),
            stack_trace: true,
        }
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn auxiliary(mut self, value: impl Into<Value>) -> Self {
        self.auxiliary = Some(value.into());
        self
    }

    #[must_use]
    pub fn without_stack_trace(mut self) -> Self {
        self.stack_trace = false;
        self
    }

    /// Build a call from the legacy `(message, second?, third?)` shape.
    ///
    /// An omitted `second` is "no payload", an omitted `third` is the empty
    /// tag. Rules, in order:
    /// 1. string second + structured third: swap them.
    /// 2. otherwise string second + empty-string third: second is the tag,
    ///    no payload.
    /// 3. a non-string tag becomes the empty tag.
    pub fn positional(
        message: impl Into<String>,
        second: Option<Value>,
        third: Option<Value>,
    ) -> Self {
        let (auxiliary, tag) = normalize_positional(second, third);
        Self {
            message: message.into(),
            auxiliary,
            tag,
            stack_trace: true,
        }
    }

    pub fn is_tagged(&self) -> bool {
        !self.tag.trim().is_empty()
    }
}

impl From<&str> for LogCall {
    fn from(message: &str) -> Self {
        LogCall::new(message)
    }
}

impl From<String> for LogCall {
    fn from(message: String) -> Self {
        LogCall::new(message)
    }
}

impl From<&String> for LogCall {
    fn from(message: &String) -> Self {
        LogCall::new(message.as_str())
    }
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_) | Value::Null)
}

fn normalize_positional(second: Option<Value>, third: Option<Value>) -> (Option<Value>, String) {
    let third = third.unwrap_or_else(|| Value::String(String::new()));

    let (auxiliary, tag) = match (second, third) {
        (Some(Value::String(tag)), payload) if is_structured(&payload) => {
            (Some(payload), Value::String(tag))
        }
        (Some(Value::String(tag)), Value::String(empty)) if empty.is_empty() => {
            (None, Value::String(tag))
        }
        (auxiliary, tag) => (auxiliary, tag),
    };

    let tag = match tag {
        Value::String(s) => s,
        _ => String::new(),
    };
    (auxiliary, tag)
}

/// Text of the stack-trace record emitted by the error entry point
pub fn trace_line(tag: &str, message: &str) -> String {
    format!("[Error Stack Trace - {}] {}", tag, message_preview(message))
}

/// Trimmed message, cut to 7 characters plus `..` when longer than
/// [`TRACE_PREVIEW_CHARS`].
pub fn message_preview(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.chars().count() > TRACE_PREVIEW_CHARS {
        let head: String = trimmed.chars().take(TRACE_PREVIEW_CHARS - 1).collect();
        format!("{}..", head.trim())
    } else {
        trimmed.to_string()
    }
}
