//! Simplified ease-based spaced repetition rule.
//!
//! Each item carries an integer ease level from 0 to 3:
//! - A correct answer raises ease by one, an incorrect answer lowers it by one
//! - Ease saturates at both ends, it never wraps
//! - Items without a review record start from the baseline ease of 2
//! - The next review is scheduled a fixed number of days ahead, looked up by the new ease
//!
//! This is intentionally not SM-2: there are no quality grades and no interval growth factor.

use super::ReviewRecord;
use chrono::{Duration, NaiveDate};

pub const MIN_EASE: u8 = 0;
pub const MAX_EASE: u8 = 3;
/// Ease assumed for an item that has never been reviewed.
pub const BASELINE_EASE: u8 = 2;
/// Days until the next review, indexed by ease level.
pub const INTERVAL_DAYS: [i64; 4] = [1, 2, 4, 7];

/// Moves `current` one step up or down, clamped to `MIN_EASE..=MAX_EASE`.
pub fn next_ease(current: u8, correct: bool) -> u8 {
    let next = if correct {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1)
    };
    next.clamp(MIN_EASE, MAX_EASE)
}

pub fn interval_days(ease: u8) -> i64 {
    INTERVAL_DAYS[usize::from(ease.min(MAX_EASE))]
}

/// Calculates the record that replaces `previous` after one graded answer.
pub fn reschedule(previous: Option<&ReviewRecord>, correct: bool, today: NaiveDate) -> ReviewRecord {
    let current = previous.map_or(BASELINE_EASE, |r| r.ease);
    let ease = next_ease(current, correct);
    ReviewRecord {
        ease,
        due: today + Duration::days(interval_days(ease)),
    }
}
