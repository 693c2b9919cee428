//! Short study tips shown next to a session.
use super::SessionSelection;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub subject: String,
    pub body: String,
    pub url: String,
}

/// Picks the tip matching the subject of the first selected item, else the first tip.
pub fn pick_tip<'a>(tips: &'a [Tip], selection: &SessionSelection) -> Option<&'a Tip> {
    selection
        .items
        .first()
        .and_then(|item| tips.iter().find(|t| t.subject == item.subject))
        .or_else(|| tips.first())
}
