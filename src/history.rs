use serde::Serialize;
use tracing::debug;

use crate::time::{Operation, TimeOfDay};

pub const HISTORY_CAPACITY: usize = 5;

pub type EntryId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub time1: String,
    pub time2: String,
    pub operation: Operation,
    pub result: String,
}

impl HistoryEntry {
    /// `time1 op time2 = result`
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.time1, self.operation, self.time2, self.result
        )
    }
}

/// Recent calculations, newest first, never longer than [`HISTORY_CAPACITY`].
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    next_id: EntryId,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAPACITY + 1),
            next_id: 1,
        }
    }

    pub fn record(
        &mut self,
        time1: TimeOfDay,
        time2: TimeOfDay,
        operation: Operation,
        result: TimeOfDay,
    ) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            HistoryEntry {
                id,
                time1: time1.to_string(),
                time2: time2.to_string(),
                operation,
                result: result.to_string(),
            },
        );
        if self.entries.len() > HISTORY_CAPACITY {
            let evicted = self.entries.split_off(HISTORY_CAPACITY);
            debug!(count = evicted.len(), "evicted old history entries");
        }
        id
    }

    /// Returns whether an entry was removed; unknown ids are ignored.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        debug!(id, removed, "remove history entry");
        removed
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(minutes: u16) -> TimeOfDay {
        TimeOfDay::from_total_minutes(minutes)
    }

    fn record_n(history: &mut History, n: u16) -> Vec<EntryId> {
        (0..n)
            .map(|i| history.record(t(i * 60), t(30), Operation::Add, t(i * 60 + 30)))
            .collect()
    }

    #[test]
    fn formats_entry_strings() {
        let mut history = History::new();
        history.record(t(1410), t(60), Operation::Add, t(30));
        let entry = &history.entries()[0];
        assert_eq!(entry.time1, "23:30");
        assert_eq!(entry.time2, "01:00");
        assert_eq!(entry.result, "00:30");
        assert_eq!(entry.describe(), "23:30 + 01:00 = 00:30");
    }

    #[test]
    fn keeps_only_newest_five() {
        let mut history = History::new();
        let ids = record_n(&mut history, 6);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        let kept: Vec<_> = history.entries().iter().map(|e| e.id).collect();
        let expected: Vec<_> = ids.iter().rev().take(HISTORY_CAPACITY).copied().collect();
        assert_eq!(kept, expected);
        assert!(!history.entries().iter().any(|e| e.id == ids[0]));
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let mut history = History::new();
        let first = record_n(&mut history, 2);
        assert!(history.remove(first[1]));
        let next = history.record(t(0), t(0), Operation::Subtract, t(0));
        assert!(next > first[1]);
    }

    #[test]
    fn remove_by_id() {
        let mut history = History::new();
        let ids = record_n(&mut history, 3);
        assert!(history.remove(ids[1]));
        let kept: Vec<_> = history.entries().iter().map(|e| e.id).collect();
        assert_eq!(kept, vec![ids[2], ids[0]]);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut history = History::new();
        record_n(&mut history, 3);
        let before = history.entries().to_vec();
        assert!(!history.remove(999));
        assert_eq!(history.entries(), before.as_slice());
    }

    #[test]
    fn starts_empty() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}
