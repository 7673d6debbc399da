//! Bounded in-memory audit trail
//!
//! FIFO ring over a `VecDeque`: when the log is full, the oldest entries
//! are evicted to make room. Capacity is fixed at construction.

use std::collections::VecDeque;

use domain::AuditEntry;

/// Bounded audit trail, oldest entries evicted first
#[derive(Debug)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    capacity: usize,
}

impl AuditLog {
    /// Create an empty log holding at most `capacity` entries
    ///
    /// A zero capacity is rejected upstream by configuration validation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when full
    pub fn add_entry(&mut self, entry: AuditEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries in insertion order, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    /// The newest `n` entries, newest first
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<AuditEntry> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored entries
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use domain::AuditEventType;

    use super::*;

    fn entry(description: &str) -> AuditEntry {
        AuditEntry::new(AuditEventType::System, description)
    }

    #[test]
    fn starts_empty() {
        let log = AuditLog::with_capacity(8);
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.capacity(), 8);
    }

    #[test]
    fn stores_entries_in_insertion_order() {
        let mut log = AuditLog::with_capacity(8);
        log.add_entry(entry("first"));
        log.add_entry(entry("second"));

        let descriptions: Vec<&str> = log.entries().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = AuditLog::with_capacity(3);
        for i in 0..5 {
            log.add_entry(entry(&format!("entry-{i}")));
        }

        assert_eq!(log.len(), 3);
        let descriptions: Vec<&str> = log.entries().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["entry-2", "entry-3", "entry-4"]);
    }

    #[test]
    fn eviction_keeps_len_at_capacity_exactly() {
        let mut log = AuditLog::with_capacity(100);
        for i in 0..107 {
            log.add_entry(entry(&format!("entry-{i}")));
        }

        assert_eq!(log.len(), 100);
        assert_eq!(
            log.entries().next().map(|e| e.description.as_str()),
            Some("entry-7")
        );
    }

    #[test]
    fn recent_returns_newest_first() {
        let mut log = AuditLog::with_capacity(8);
        for i in 0..4 {
            log.add_entry(entry(&format!("entry-{i}")));
        }

        let recent: Vec<String> = log.recent(2).into_iter().map(|e| e.description).collect();
        assert_eq!(recent, vec!["entry-3", "entry-2"]);
    }

    #[test]
    fn recent_with_large_n_returns_everything() {
        let mut log = AuditLog::with_capacity(8);
        log.add_entry(entry("only"));

        assert_eq!(log.recent(100).len(), 1);
        assert!(log.recent(0).is_empty());
    }

    #[test]
    fn clear_removes_everything_but_keeps_capacity() {
        let mut log = AuditLog::with_capacity(4);
        log.add_entry(entry("gone"));
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.capacity(), 4);

        log.add_entry(entry("back"));
        assert_eq!(log.len(), 1);
    }
}
