//! Values exchanged with the UI around one session: the selection going out,
//! the answers coming back and the summary of the grading.
use super::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of items presented per session.
pub const SESSION_SIZE: usize = 3;

/// Up to three distinct items chosen for one session. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSelection {
    pub items: Vec<Item>,
}

impl SessionSelection {
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An answer submitted for one item. `choice` is `None` when nothing was picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub item_id: String,
    pub choice: Option<usize>,
}

impl GradedAnswer {
    pub fn new(item_id: impl Into<String>, choice: Option<usize>) -> Self {
        Self {
            item_id: item_id.into(),
            choice,
        }
    }
}

/// Result for one graded item, with the explanation to show next to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradedItem {
    pub item_id: String,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub correct_count: usize,
    /// `answers.len() - correct_count`, a display metric rather than a due-item tally
    pub remaining_review_count: usize,
    pub total: usize,
    pub results: Vec<GradedItem>,
    /// Answers whose item id was not in the catalog
    pub skipped: Vec<String>,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}/{}  Reviews for tomorrow: {}",
            self.correct_count, self.total, self.remaining_review_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = SessionSummary {
            correct_count: 2,
            remaining_review_count: 1,
            total: 3,
            ..Default::default()
        };
        assert_eq!(summary.to_string(), "Score: 2/3  Reviews for tomorrow: 1");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = SessionSummary {
            correct_count: 3,
            total: 3,
            ..Default::default()
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["correctCount"], 3);
        assert_eq!(value["remainingReviewCount"], 0);
    }
}
