//! Plain-text progress report of recent attempts.

use crate::models::{Profile, SessionLog};

const CORRECT_MARK: &str = "○";
const WRONG_MARK: &str = "×";

/// Builds the report body: a name/exam header, then the last `limit` log
/// entries as `<date> <qid> ○|×`, oldest first.
pub fn progress_report(profile: Option<&Profile>, log: &SessionLog, limit: usize) -> String {
    let name = profile.map_or("", |p| p.name.as_str());
    let exam = profile.map_or("", |p| p.exam.as_str());

    let lines: Vec<String> = log
        .recent(limit)
        .iter()
        .map(|entry| {
            format!(
                "{} {} {}",
                entry.date,
                entry.item_id,
                if entry.correct { CORRECT_MARK } else { WRONG_MARK }
            )
        })
        .collect();

    format!("Name: {}\nExam: {}\n\n{}", name, exam, lines.join("\n"))
}
