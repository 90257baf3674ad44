//! Duplicate-message suppression
//!
//! Collapses bursts of identical messages (for example from a caller that
//! is re-invoked in a tight loop) by refusing a message whose exact text
//! was admitted within the last `window`. The same mechanism also hides
//! legitimate rapid repeats, so the stage ships disabled and must be
//! switched on explicitly.
//!
//! Matching is exact and case-sensitive. History is bounded by the window,
//! not by a count: every check prunes entries older than the window.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default suppression window
pub const DEFAULT_DUPLICATE_WINDOW: Duration = Duration::from_millis(420);

/// Shortest window the suppressor runs with
pub const MIN_DUPLICATE_WINDOW: Duration = Duration::from_millis(1);

/// Window in whole milliseconds, saturating and at least one.
pub(crate) fn window_millis(window: Duration) -> u64 {
    u64::try_from(window.as_millis())
        .unwrap_or(u64::MAX)
        .max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateConfig {
    pub enabled: bool,
    /// Window length in milliseconds
    pub window_ms: u64,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            window_ms: DEFAULT_DUPLICATE_WINDOW.as_millis() as u64,
        }
    }
}

impl DuplicateConfig {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window_ms = window_millis(window);
        self
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms).max(MIN_DUPLICATE_WINDOW)
    }
}

#[derive(Debug, Clone)]
struct SeenMessage {
    message: String,
    at: Instant,
}

#[derive(Debug, Clone)]
pub struct DuplicateSuppressor {
    enabled: bool,
    window: Duration,
    history: VecDeque<SeenMessage>,
}

impl DuplicateSuppressor {
    pub fn new(config: DuplicateConfig) -> Self {
        Self {
            enabled: config.enabled,
            window: config.window(),
            history: VecDeque::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn the stage on or off. Disabling forgets the history so a later
    /// re-enable starts clean.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.history.clear();
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Windows shorter than [`MIN_DUPLICATE_WINDOW`] are raised to it.
    pub fn set_window(&mut self, window: Duration) {
        self.window = window.max(MIN_DUPLICATE_WINDOW);
    }

    /// Returns `true` when `message` may be printed at `now`.
    ///
    /// A refused duplicate is not recorded, so a steady stream of repeats
    /// is let through once per window measured from the last admitted copy.
    pub fn check(&mut self, message: &str, now: Instant) -> bool {
        if !self.enabled {
            return true;
        }

        let window = self.window;
        self.history
            .retain(|seen| now.saturating_duration_since(seen.at) < window);

        if self.history.iter().any(|seen| seen.message == message) {
            return false;
        }

        self.history.push_back(SeenMessage {
            message: message.to_string(),
            at: now,
        });
        true
    }

    /// Number of entries currently inside the window
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for DuplicateSuppressor {
    fn default() -> Self {
        Self::new(DuplicateConfig::default())
    }
}
