//! One study session end to end: load the stores, select, grade, write back.

use super::{grader, selector};
use crate::database::KeyValueStore;
use crate::database::state::{self, LOGS_KEY, PROFILE_KEY, REVIEWS_KEY};
use crate::error::Result;
use crate::models::{
    GradedAnswer, Profile, QuestionBank, ReviewStore, SessionLog, SessionSelection, SessionSummary,
};
use chrono::NaiveDate;
use rand::Rng;

/// Scheduler front end. Holds no state of its own; every call reads a fresh
/// snapshot from the store.
pub struct StudyCoach<'a> {
    store: &'a dyn KeyValueStore,
    bank: &'a QuestionBank,
}

impl<'a> StudyCoach<'a> {
    pub fn new(store: &'a dyn KeyValueStore, bank: &'a QuestionBank) -> Self {
        Self { store, bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        self.bank
    }

    /// Saves the profile and starts from empty reviews and log.
    pub fn onboard(&self, profile: &Profile) -> Result<()> {
        self.store.set_many(&[
            (PROFILE_KEY, serde_json::to_string(profile)?),
            (REVIEWS_KEY, serde_json::to_string(&ReviewStore::new())?),
            (LOGS_KEY, serde_json::to_string(&SessionLog::new())?),
        ])?;
        tracing::info!(name = %profile.name, exam = %profile.exam, "Profile saved");
        Ok(())
    }

    pub fn profile(&self) -> Result<Option<Profile>> {
        state::load_profile(self.store)
    }

    pub fn reviews(&self) -> Result<ReviewStore> {
        state::load_reviews(self.store)
    }

    pub fn log(&self) -> Result<SessionLog> {
        state::load_logs(self.store)
    }

    /// Picks the items for today's session.
    pub fn start_session<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<SessionSelection> {
        let reviews = self.reviews()?;
        let selection = selector::select(self.bank.items(), &reviews, today, rng)?;
        tracing::info!(
            %today,
            due = reviews.due_count(today),
            items = selection.len(),
            "Session started"
        );
        Ok(selection)
    }

    /// Grades a batch of answers and persists reviews and log together.
    /// On any error nothing from this batch is written.
    pub fn submit(&self, answers: &[GradedAnswer], today: NaiveDate) -> Result<SessionSummary> {
        let outcome = grader::grade(answers, self.bank, self.reviews()?, self.log()?, today);
        state::save_session_state(self.store, &outcome.reviews, &outcome.log)?;
        tracing::info!(
            correct = outcome.summary.correct_count,
            total = outcome.summary.total,
            skipped = outcome.summary.skipped.len(),
            "Session graded"
        );
        Ok(outcome.summary)
    }

    /// Wipes all stored state, profile included.
    pub fn reset(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("Study state cleared");
        Ok(())
    }
}
