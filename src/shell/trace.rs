use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugEntry {
    pub at: DateTime<Utc>,
    pub level: TraceLevel,
    pub message: String,
}

/// Bounded, always-visible diagnostic channel shown in the page's debug panel.
#[derive(Debug, Clone)]
pub struct DebugTrace {
    entries: VecDeque<DebugEntry>,
    capacity: usize,
}

impl DebugTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(TraceLevel::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(TraceLevel::Error, message.into());
    }

    fn push(&mut self, level: TraceLevel, message: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(DebugEntry {
            at: Utc::now(),
            level,
            message,
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &DebugEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&DebugEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DebugTrace {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
