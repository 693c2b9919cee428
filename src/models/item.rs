//! Item is one multiple-choice question from the question bank. Immutable within a session.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub subject: String,
    pub stem: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer
    #[serde(rename = "answer")]
    pub answer_index: usize,
    #[serde(rename = "explain")]
    pub explanation: String,
}

impl Item {
    /// An unanswered item (`None`) is never correct.
    pub fn is_correct(&self, choice: Option<usize>) -> bool {
        choice == Some(self.answer_index)
    }
}
