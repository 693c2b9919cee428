//! JSON import/export for the question bank, tips and the session log.

use crate::error::Result;
use crate::models::{Item, QuestionBank, SessionLog, Tip};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

fn read_to_string(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Loads the question bank from a JSON array of items.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<QuestionBank> {
    let items: Vec<Item> = serde_json::from_str(&read_to_string(path.as_ref())?)?;
    tracing::info!(
        items = items.len(),
        path = %path.as_ref().display(),
        "Loaded question bank"
    );
    Ok(QuestionBank::new(items))
}

pub fn load_tips(path: impl AsRef<Path>) -> Result<Vec<Tip>> {
    Ok(serde_json::from_str(&read_to_string(path.as_ref())?)?)
}

/// Writes the whole session log as pretty JSON.
pub fn export_log_to_path(log: &SessionLog, path: impl AsRef<Path>) -> Result<()> {
    let json_string = serde_json::to_string_pretty(log)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    tracing::info!(entries = log.len(), path = %path.as_ref().display(), "Exported log");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoachError;
    use crate::models::LogEntry;
    use chrono::NaiveDate;
    use std::fs;

    const CATALOG: &str = r#"[
  {
    "id": "en-1",
    "subject": "English",
    "stem": "Pick the synonym of 'rapid'.",
    "choices": ["slow", "quick", "late"],
    "answer": 1,
    "explain": "'rapid' means quick."
  },
  {
    "id": "ma-1",
    "subject": "Math",
    "stem": "3 x 4 = ?",
    "choices": ["7", "12"],
    "answer": 1,
    "explain": "Multiplication."
  }
]"#;

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, CATALOG).unwrap();

        let bank = load_catalog(&path).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.items()[0].id, "en-1");
        assert_eq!(bank.get("ma-1").unwrap().choices.len(), 2);
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let bank = load_catalog(concat!(env!("CARGO_MANIFEST_DIR"), "/data/questions.json")).unwrap();
        assert!(bank.len() >= 3);
        for item in bank.items() {
            assert!(item.answer_index < item.choices.len(), "bad answer for {}", item.id);
        }
        let tips = load_tips(concat!(env!("CARGO_MANIFEST_DIR"), "/data/tips.json")).unwrap();
        assert!(!tips.is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("nonexistent_catalog_xyz123.json");
        assert!(matches!(result, Err(CoachError::Io(_))));
    }

    #[test]
    fn test_load_catalog_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(matches!(load_catalog(&path), Err(CoachError::Json(_))));
    }

    #[test]
    fn test_load_tips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tips.json");
        fs::write(
            &path,
            r#"[{"subject":"English","body":"Read aloud.","url":"https://example.com/en"}]"#,
        )
        .unwrap();

        let tips = load_tips(&path).unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].body, "Read aloud.");
    }

    #[test]
    fn test_export_log_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let log: SessionLog = vec![LogEntry {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            item_id: "en-1".to_string(),
            correct: true,
        }]
        .into();

        export_log_to_path(&log, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"qid\": \"en-1\""));
        let back: SessionLog = serde_json::from_str(&written).unwrap();
        assert_eq!(back, log);
    }
}
