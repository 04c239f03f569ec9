//! Command History
//!
//! A bounded, de-duplicating ledger of submitted command lines with an
//! up/down browsing cursor. Browsing only moves the cursor; only
//! [`HistoryLedger::record`] changes the entries.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::HISTORY_CAPACITY;

/// Browsing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward older entries
    Up,
    /// Toward newer entries, then past the newest to a blank line
    Down,
}

/// Outcome of a browsing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation<'a> {
    /// The ledger is empty; leave the input line alone
    Unchanged,
    /// The cursor moved past the newest entry; show an empty input line
    Blank,
    /// The cursor sits on this entry
    Entry(&'a str),
}

/// Submitted command lines, oldest first
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<String>,
    /// `None` when not browsing
    cursor: Option<usize>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command, moving an identical earlier entry to the end
    ///
    /// Keeps the most recent `HISTORY_CAPACITY` entries and resets the
    /// browsing cursor.
    pub fn record(&mut self, command: &str) {
        self.entries.retain(|e| e != command);
        self.entries.push(String::from(command));
        if self.entries.len() > HISTORY_CAPACITY {
            let excess = self.entries.len() - HISTORY_CAPACITY;
            self.entries.drain(..excess);
        }
        self.cursor = None;
    }

    /// Move the browsing cursor one step
    pub fn navigate(&mut self, direction: Direction) -> Navigation<'_> {
        if self.entries.is_empty() {
            return Navigation::Unchanged;
        }
        let last = self.entries.len() - 1;

        self.cursor = match (direction, self.cursor) {
            (Direction::Up, None) => Some(last),
            (Direction::Up, Some(i)) => Some(i.saturating_sub(1)),
            (Direction::Down, None) => None,
            (Direction::Down, Some(i)) if i >= last => None,
            (Direction::Down, Some(i)) => Some(i + 1),
        };

        match self.cursor {
            Some(i) => Navigation::Entry(&self.entries[i]),
            None => Navigation::Blank,
        }
    }

    /// Current cursor position, `None` when not browsing
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn ledger(cmds: &[&str]) -> HistoryLedger {
        let mut h = HistoryLedger::new();
        for c in cmds {
            h.record(c);
        }
        h
    }

    #[test]
    fn test_record_moves_duplicate_to_end() {
        let h = ledger(&["cd projects", "ls", "cd projects"]);
        assert_eq!(h.entries(), &["ls", "cd projects"]);
    }

    #[test]
    fn test_record_caps_length() {
        let mut h = HistoryLedger::new();
        for i in 0..(HISTORY_CAPACITY + 10) {
            h.record(&format!("cmd {}", i));
        }
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.entries()[0], "cmd 10");
        assert_eq!(h.entries()[HISTORY_CAPACITY - 1], format!("cmd {}", HISTORY_CAPACITY + 9));
    }

    #[test]
    fn test_navigate_empty_is_unchanged() {
        let mut h = HistoryLedger::new();
        assert_eq!(h.navigate(Direction::Up), Navigation::Unchanged);
        assert_eq!(h.navigate(Direction::Down), Navigation::Unchanged);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn test_navigate_up_clamps_at_oldest() {
        let mut h = ledger(&["a", "b", "c"]);
        assert_eq!(h.navigate(Direction::Up), Navigation::Entry("c"));
        assert_eq!(h.navigate(Direction::Up), Navigation::Entry("b"));
        assert_eq!(h.navigate(Direction::Up), Navigation::Entry("a"));
        assert_eq!(h.navigate(Direction::Up), Navigation::Entry("a"));
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn test_navigate_down_returns_to_blank() {
        let mut h = ledger(&["a", "b", "c"]);
        for _ in 0..3 {
            h.navigate(Direction::Up);
        }
        assert_eq!(h.navigate(Direction::Down), Navigation::Entry("b"));
        assert_eq!(h.navigate(Direction::Down), Navigation::Entry("c"));
        assert_eq!(h.navigate(Direction::Down), Navigation::Blank);
        assert_eq!(h.navigate(Direction::Down), Navigation::Blank);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn test_navigate_does_not_touch_entries() {
        let mut h = ledger(&["a", "b"]);
        h.navigate(Direction::Up);
        h.navigate(Direction::Down);
        assert_eq!(h.entries(), &["a", "b"]);
    }

    #[test]
    fn test_record_resets_cursor() {
        let mut h = ledger(&["a", "b"]);
        h.navigate(Direction::Up);
        h.navigate(Direction::Up);
        h.record("c");
        assert_eq!(h.cursor(), None);
        assert_eq!(h.navigate(Direction::Up), Navigation::Entry("c"));
    }
}
