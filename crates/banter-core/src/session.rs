//! Per-session mutable state.
//!
//! One `SessionState` per conversation: the running flag, a monotonic start
//! mark, and the transcript of every dispatched line. The history is a
//! literal record of normalized inputs -- command phrases like "help" or
//! "joke" are recorded too.

use std::time::Duration;

use crate::capability::Clock;

/// How many history entries the rendered view shows at most.
pub const HISTORY_VIEW_CAP: usize = 20;

/// Mutable record of one conversation.
pub struct SessionState {
    running: bool,
    /// Monotonic reading at session creation, from the injected clock.
    started_at: Duration,
    history: Vec<String>,
}

impl SessionState {
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            running: true,
            started_at: clock.monotonic(),
            history: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request session termination. Only the exit rule calls this.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Append one dispatched line to the transcript.
    pub fn record(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Time elapsed since session creation. Never negative, even if the
    /// clock is handed in cold.
    pub fn uptime(&self, clock: &dyn Clock) -> Duration {
        clock.monotonic().saturating_sub(self.started_at)
    }

    /// The most recent `cap` entries and the 0-based index of the first one,
    /// for rendering with absolute 1-based positions.
    pub fn history_window(&self, cap: usize) -> (usize, &[String]) {
        let start = self.history.len().saturating_sub(cap);
        (start, &self.history[start..])
    }
}

/// Format a duration as `<h>h <m>m <s>s`.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}
