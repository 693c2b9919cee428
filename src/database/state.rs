//! Typed access to the stored study state.
//!
//! `decode_*` validate strictly and return `MalformedStoredState`; `load_*`
//! log that error and fall back to the empty default, so a damaged value
//! never blocks a session.

use super::KeyValueStore;
use crate::error::{CoachError, Result};
use crate::models::{Profile, ReviewStore, SessionLog};
use serde::de::DeserializeOwned;

pub const REVIEWS_KEY: &str = "reviews";
pub const LOGS_KEY: &str = "logs";
pub const PROFILE_KEY: &str = "profile";

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| CoachError::MalformedStoredState {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

pub fn decode_reviews(raw: &str) -> Result<ReviewStore> {
    let reviews: ReviewStore = decode(REVIEWS_KEY, raw)?;
    if let Some(id) = reviews.find_out_of_range() {
        return Err(CoachError::MalformedStoredState {
            key: REVIEWS_KEY.to_string(),
            reason: format!("ease out of range for item '{}'", id),
        });
    }
    Ok(reviews)
}

pub fn decode_logs(raw: &str) -> Result<SessionLog> {
    decode(LOGS_KEY, raw)
}

pub fn decode_profile(raw: &str) -> Result<Profile> {
    decode(PROFILE_KEY, raw)
}

fn load_or_default<T: Default>(
    store: &dyn KeyValueStore,
    key: &str,
    decode: fn(&str) -> Result<T>,
) -> Result<T> {
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match decode(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring stored state, using empty default");
            Ok(T::default())
        }
    }
}

/// Loads the review store, or an empty one if missing or malformed.
pub fn load_reviews(store: &dyn KeyValueStore) -> Result<ReviewStore> {
    load_or_default(store, REVIEWS_KEY, decode_reviews)
}

/// Loads the session log, or an empty one if missing or malformed.
pub fn load_logs(store: &dyn KeyValueStore) -> Result<SessionLog> {
    load_or_default(store, LOGS_KEY, decode_logs)
}

/// Loads the profile; `None` until onboarding has run or if it is malformed.
pub fn load_profile(store: &dyn KeyValueStore) -> Result<Option<Profile>> {
    load_or_default(store, PROFILE_KEY, |raw| decode_profile(raw).map(Some))
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &Profile) -> Result<()> {
    store.set(PROFILE_KEY, &serde_json::to_string(profile)?)
}

/// Replaces both the review store and the log in one atomic write.
pub fn save_session_state(
    store: &dyn KeyValueStore,
    reviews: &ReviewStore,
    log: &SessionLog,
) -> Result<()> {
    store.set_many(&[
        (REVIEWS_KEY, serde_json::to_string(reviews)?),
        (LOGS_KEY, serde_json::to_string(log)?),
    ])?;
    tracing::info!(reviews = reviews.len(), log_entries = log.len(), "Saved study state");
    Ok(())
}
