//! NoticeState - Submit Notices with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "INFO",
            NoticeLevel::Warn => "WARN",
            NoticeLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            NoticeLevel::Info => gpui::rgba(0x22c55eff),
            NoticeLevel::Warn => gpui::rgba(0xf59e0bff),
            NoticeLevel::Error => gpui::rgba(0xef4444ff),
        }
    }
}

/// A single notice shown in the details output pane
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for submit notices using a ring buffer
#[derive(Debug)]
pub struct NoticeState {
    entries: VecDeque<Notice>,
    capacity: usize,
    next_id: u64,
}

impl NoticeState {
    /// Create a new notice state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a new notice with the current timestamp
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp: Local::now(),
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Get all notices (oldest first)
    pub fn entries(&self) -> &VecDeque<Notice> {
        &self.entries
    }

    /// Get the number of notices
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all notices
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut state = NoticeState::new(10);
        state.push(NoticeLevel::Info, "first");
        state.push(NoticeLevel::Error, "second");
        assert_eq!(state.len(), 2);
        assert_eq!(state.entries()[0].message, "first");
        assert_eq!(state.entries()[1].level, NoticeLevel::Error);
    }

    #[test]
    fn test_ring_buffer_eviction() {
        let mut state = NoticeState::new(2);
        state.push(NoticeLevel::Info, "a");
        state.push(NoticeLevel::Info, "b");
        state.push(NoticeLevel::Info, "c");
        assert_eq!(state.len(), 2);
        assert_eq!(state.entries()[0].message, "b");
        assert_eq!(state.entries()[1].message, "c");
    }

    #[test]
    fn test_clear() {
        let mut state = NoticeState::default();
        state.push(NoticeLevel::Warn, "notice");
        state.clear();
        assert!(state.is_empty());
    }
}
