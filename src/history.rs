// File: src/history.rs
//! Bounded log of committed translations.

use crate::config::HistoryConfig;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub input: String,
    pub output: String,
}

/// Keeps the newest `capacity` records; the oldest is evicted first.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    records: VecDeque<HistoryRecord>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(config: &HistoryConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn from_records(records: Vec<HistoryRecord>, config: &HistoryConfig) -> Self {
        let mut store = Self::new(config);
        for record in records {
            store.push(record);
        }
        store
    }

    pub fn add(&mut self, input: &str, output: &str) -> &HistoryRecord {
        self.add_at(input, output, Utc::now())
    }

    /// Timestamps are kept at millisecond resolution, the precision they are
    /// stored with.
    pub fn add_at(&mut self, input: &str, output: &str, timestamp: DateTime<Utc>) -> &HistoryRecord {
        let timestamp = timestamp.trunc_subsecs(3);
        let record = HistoryRecord {
            id: generate_id(timestamp),
            timestamp,
            input: input.to_string(),
            output: output.to_string(),
        };
        self.push(record);
        // push never leaves the deque empty
        &self.records[self.records.len() - 1]
    }

    fn push(&mut self, record: HistoryRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Plain-text export, oldest first. `None` when there is nothing to export.
    pub fn export_text(&self) -> Option<String> {
        if self.records.is_empty() {
            return None;
        }
        let blocks: Vec<String> = self
            .records
            .iter()
            .map(|r| {
                format!(
                    "[{}] {}\n{}\n=>\n{}\n",
                    r.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                    r.id,
                    r.input,
                    r.output
                )
            })
            .collect();
        Some(blocks.join("\n"))
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

/// `DD-<base36 millis>-<4 random uppercase alphanumerics>`.
fn generate_id(timestamp: DateTime<Utc>) -> String {
    let millis = timestamp.timestamp_millis().max(0) as u64;
    const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let suffix: String = Uuid::new_v4().as_bytes()[..4]
        .iter()
        .map(|&b| ALPHABET[b as usize % ALPHABET.len()] as char)
        .collect();
    format!("DD-{}-{}", to_base36(millis), suffix)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn id_shape() {
        let mut store = HistoryStore::default();
        let id = store.add_at("SOS", "... --- ...", at(36)).id.clone();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "DD");
        assert_eq!(parts[1], "10");
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn timestamps_are_truncated_to_millis() {
        let mut store = HistoryStore::default();
        let precise = at(1_700_000_000_123) + chrono::Duration::nanoseconds(456_789);
        let record = store.add_at("E", ".", precise);
        assert_eq!(record.timestamp, at(1_700_000_000_123));
        assert_eq!(store.add("T", "-").timestamp.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut store = HistoryStore::new(&HistoryConfig { capacity: 3 });
        for i in 0..5 {
            store.add_at(&format!("in{i}"), "out", at(i));
        }
        let inputs: Vec<&str> = store.records().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, vec!["in2", "in3", "in4"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn default_capacity_is_ten() {
        let mut store = HistoryStore::default();
        for i in 0..12 {
            store.add_at("x", "-..-", at(i));
        }
        assert_eq!(store.len(), 10);
        assert_eq!(store.capacity(), 10);
    }

    #[test]
    fn clear_empties() {
        let mut store = HistoryStore::default();
        store.add("E", ".");
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.export_text(), None);
    }

    #[test]
    fn export_format() {
        let mut store = HistoryStore::default();
        let first = store.add_at("SOS", "... --- ...", at(0)).id.clone();
        let second = store.add_at(".", "E", at(1_500)).id.clone();
        let text = store.export_text().unwrap();
        assert_eq!(
            text,
            format!(
                "[1970-01-01T00:00:00.000Z] {first}\nSOS\n=>\n... --- ...\n\n\
                 [1970-01-01T00:00:01.500Z] {second}\n.\n=>\nE\n"
            )
        );
    }

    #[test]
    fn from_records_respects_capacity() {
        let records: Vec<HistoryRecord> = (0..4)
            .map(|i| HistoryRecord {
                id: format!("DD-{i}-AAAA"),
                timestamp: at(i),
                input: i.to_string(),
                output: String::new(),
            })
            .collect();
        let store = HistoryStore::from_records(records, &HistoryConfig { capacity: 2 });
        let ids: Vec<&str> = store.records().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["DD-2-AAAA", "DD-3-AAAA"]);
    }
}
