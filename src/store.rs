use crate::calendar::YearMonth;
use crate::models::LogEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date-keyed activity log. Keys are `YYYY-MM-DD`, so the map's ordering is
/// also chronological and every month is one contiguous key range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LogStore {
    entries: BTreeMap<String, LogEntry>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date_key: &str) -> Option<&LogEntry> {
        self.entries.get(date_key)
    }

    pub fn upsert(&mut self, date_key: impl Into<String>, entry: LogEntry) -> Option<LogEntry> {
        self.entries.insert(date_key.into(), entry)
    }

    pub fn remove(&mut self, date_key: &str) -> Option<LogEntry> {
        self.entries.remove(date_key)
    }

    pub fn entries_in_month(&self, month: YearMonth) -> impl Iterator<Item = (&str, &LogEntry)> {
        let prefix = month.key_prefix();
        self.entries
            .range(prefix.clone()..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Drops every entry of `month` and returns the removed keys.
    pub fn remove_month(&mut self, month: YearMonth) -> Vec<String> {
        let keys: Vec<String> = self
            .entries_in_month(month)
            .map(|(key, _)| key.to_string())
            .collect();
        for key in &keys {
            self.entries.remove(key);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn sample() -> LogStore {
        let mut store = LogStore::new();
        store.upsert("2024-01-31", LogEntry::credit_class(3));
        store.upsert("2024-02-01", LogEntry::fixed_class());
        store.upsert("2024-02-29", LogEntry::credit_class(8));
        store.upsert("2024-03-01", LogEntry::fixed_class());
        store.upsert("2025-02-10", LogEntry::fixed_class());
        store
    }

    #[test]
    fn entries_in_month_only_matches_prefix() {
        let store = sample();
        let keys: Vec<&str> = store
            .entries_in_month(month(2024, 2))
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["2024-02-01", "2024-02-29"]);

        let march: Vec<&str> = store
            .entries_in_month(month(2024, 3))
            .map(|(key, _)| key)
            .collect();
        assert_eq!(march, vec!["2024-03-01"]);
        assert_eq!(store.entries_in_month(month(2024, 4)).count(), 0);
    }

    #[test]
    fn every_entry_belongs_to_exactly_one_month() {
        let store = sample();
        let mut seen = 0;
        for year in 2023..=2025 {
            for m in 1..=12 {
                seen += store.entries_in_month(month(year, m)).count();
            }
        }
        assert_eq!(seen, store.len());
    }

    #[test]
    fn upsert_replaces_existing_entry() {
        let mut store = LogStore::new();
        assert!(store.upsert("2024-02-10", LogEntry::fixed_class()).is_none());
        let previous = store.upsert("2024-02-10", LogEntry::credit_class(4));
        assert_eq!(previous, Some(LogEntry::fixed_class()));
        assert_eq!(store.get("2024-02-10"), Some(&LogEntry::credit_class(4)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut store = sample();
        let before = store.clone();
        assert!(store.remove("2030-01-01").is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn remove_month_is_idempotent() {
        let mut store = sample();
        let removed = store.remove_month(month(2024, 2));
        assert_eq!(removed, vec!["2024-02-01", "2024-02-29"]);
        let once = store.clone();

        assert!(store.remove_month(month(2024, 2)).is_empty());
        assert_eq!(store, once);
        assert!(store.get("2024-03-01").is_some());
        assert!(store.get("2024-01-31").is_some());
        assert!(store.get("2025-02-10").is_some());
    }
}
