//! Append-only record of graded attempts.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    #[serde(rename = "qid")]
    pub item_id: String,
    pub correct: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionLog(Vec<LogEntry>);

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.0
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[LogEntry] {
        let start = self.0.len().saturating_sub(limit);
        &self.0[start..]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<LogEntry>> for SessionLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u32) -> LogEntry {
        LogEntry {
            date: NaiveDate::from_ymd_opt(2025, 1, n).unwrap(),
            item_id: format!("q{}", n),
            correct: n % 2 == 0,
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let mut log = SessionLog::new();
        log.append(entry(1));
        log.append(entry(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].item_id, "q1");
        assert_eq!(log.entries()[1].item_id, "q2");
    }

    #[test]
    fn test_recent_window() {
        let log: SessionLog = (1..=5).map(entry).collect::<Vec<_>>().into();
        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].item_id, "q4");
        assert_eq!(log.recent(50).len(), 5);
        assert!(SessionLog::new().recent(3).is_empty());
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_string(&entry(3)).unwrap();
        assert_eq!(json, r#"{"date":"2025-01-03","qid":"q3","correct":false}"#);
    }
}
