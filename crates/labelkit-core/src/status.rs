//! Transient status notifications.
//!
//! Editor commands report outcomes (saved, failed, nothing selected) through
//! a [`StatusLog`] rather than returning UI strings. The embedding surface
//! drains the log and presents each message as a short-lived alert. The log
//! is bounded; once full, the oldest message is dropped.

use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 32;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Operation completed.
    Success,
    /// Operation aborted or failed; state was not mutated.
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity for presentation.
    pub level: StatusLevel,
    /// User-visible text.
    pub text: String,
}

/// Bounded queue of pending notifications.
#[derive(Debug, Clone)]
pub struct StatusLog {
    messages: VecDeque<StatusMessage>,
    capacity: usize,
}

impl StatusLog {
    /// Creates an empty log with the default capacity.
    pub fn new() -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Records a success notification.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(StatusLevel::Success, text.into());
    }

    /// Records an error notification.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(StatusLevel::Error, text.into());
    }

    fn push(&mut self, level: StatusLevel, text: String) {
        match level {
            StatusLevel::Success => tracing::info!(message = %text, "status"),
            StatusLevel::Error => tracing::warn!(message = %text, "status"),
        }
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(StatusMessage { level, text });
    }

    /// Most recent message, if any, without consuming it.
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Drains all pending messages in arrival order.
    pub fn drain(&mut self) -> Vec<StatusMessage> {
        self.messages.drain(..).collect()
    }

    /// Number of pending messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log has no pending messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}
