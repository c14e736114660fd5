//! History entries produced by evaluations.

use crate::calculator::CalculatorState;
use std::collections::VecDeque;

/// One evaluation as shown in the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The evaluated expression, e.g. `"12 + 3"`.
    pub expression: String,
    /// The result as it was displayed, or the error sentinel.
    pub display_result: String,
    /// Whether the evaluation failed.
    pub is_error: bool,
}

impl HistoryEntry {
    /// Build an entry from the state right after an evaluation.
    pub fn from_state(expression: String, state: &CalculatorState) -> Self {
        Self {
            expression,
            display_result: state.display().to_string(),
            is_error: state.is_error(),
        }
    }

    /// `"12 + 3 = 15"`
    pub fn summary(&self) -> String {
        format!("{} = {}", self.expression, self.display_result)
    }
}

/// Bounded list of evaluations, newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Record an entry, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.limit == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
