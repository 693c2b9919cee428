//! Item selection: which three items a session presents.
//!
//! Due reviews take precedence over new material, new material over random
//! filler. Random filler only exists so a session can always be filled, even
//! from a tiny or fully reviewed catalog.

use crate::error::{CoachError, Result};
use crate::models::session::SESSION_SIZE;
use crate::models::{Item, ReviewStore, SessionSelection};
use chrono::NaiveDate;
use rand::Rng;
use std::collections::HashSet;

/// At most this many due items are placed ahead of fresh ones.
pub const MAX_DUE_SLOTS: usize = 2;
/// At most this many never-reviewed items enter the candidate pool.
pub const MAX_FRESH_SLOTS: usize = 3;

/// Chooses up to three distinct items for a session.
///
/// Returns exactly three when the catalog has at least three distinct ids. Due and
/// fresh slots are deterministic; only the fallback draws from `rng`.
pub fn select<R: Rng + ?Sized>(
    items: &[Item],
    reviews: &ReviewStore,
    today: NaiveDate,
    rng: &mut R,
) -> Result<SessionSelection> {
    if items.is_empty() {
        return Err(CoachError::InsufficientCatalog);
    }

    // Both partitions keep catalog order
    let due = items
        .iter()
        .filter(|item| reviews.get(&item.id).is_some_and(|r| r.is_due(today)));
    let fresh = items.iter().filter(|item| !reviews.contains(&item.id));

    let mut seen = HashSet::new();
    let mut picked: Vec<&Item> = due
        .take(MAX_DUE_SLOTS)
        .chain(fresh.take(MAX_FRESH_SLOTS))
        .filter(|item| seen.insert(item.id.as_str()))
        .take(SESSION_SIZE)
        .collect();

    // Random filler, drawn only from items not already picked so the session
    // holds three distinct ids whenever the catalog has them.
    while picked.len() < SESSION_SIZE {
        let remaining: Vec<&Item> = items
            .iter()
            .filter(|item| !seen.contains(item.id.as_str()))
            .collect();
        if remaining.is_empty() {
            break;
        }
        let item = remaining[rng.gen_range(0..remaining.len())];
        seen.insert(item.id.as_str());
        picked.push(item);
    }

    let picked: Vec<Item> = picked.into_iter().cloned().collect();

    tracing::debug!(
        ids = ?picked.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
        "Selected session items"
    );

    Ok(SessionSelection { items: picked })
}
