//! Grading of submitted answers and rescheduling of the graded items.

use crate::error::CoachError;
use crate::models::ease;
use crate::models::{
    GradedAnswer, GradedItem, LogEntry, QuestionBank, ReviewStore, SessionLog, SessionSummary,
};
use chrono::NaiveDate;

/// Everything one grading pass produces. The caller persists `reviews` and `log`.
#[derive(Clone, Debug)]
pub struct GradeOutcome {
    pub summary: SessionSummary,
    pub reviews: ReviewStore,
    pub log: SessionLog,
}

/// Grades `answers` against the bank, appends one log entry per known item and
/// replaces each graded item's review record.
///
/// Works on owned copies of the stores; nothing is visible to other readers
/// until the caller writes the returned copies back. Answers for ids missing
/// from the bank are skipped and listed in `summary.skipped`.
pub fn grade(
    answers: &[GradedAnswer],
    bank: &QuestionBank,
    mut reviews: ReviewStore,
    mut log: SessionLog,
    today: NaiveDate,
) -> GradeOutcome {
    let mut summary = SessionSummary {
        total: answers.len(),
        ..Default::default()
    };

    for answer in answers {
        let Some(item) = bank.get(&answer.item_id) else {
            tracing::warn!(
                error = %CoachError::UnknownItemReference(answer.item_id.clone()),
                "Skipping answer"
            );
            summary.skipped.push(answer.item_id.clone());
            continue;
        };

        let correct = item.is_correct(answer.choice);
        if correct {
            summary.correct_count += 1;
        }

        log.append(LogEntry {
            date: today,
            item_id: item.id.clone(),
            correct,
        });

        let record = ease::reschedule(reviews.get(&item.id), correct, today);
        tracing::debug!(
            item_id = %item.id,
            correct,
            ease = record.ease,
            due = %record.due,
            "Rescheduled item"
        );
        reviews.insert(item.id.clone(), record);

        summary.results.push(GradedItem {
            item_id: item.id.clone(),
            correct,
            explanation: item.explanation.clone(),
        });
    }

    summary.remaining_review_count = answers.len() - summary.correct_count;

    GradeOutcome {
        summary,
        reviews,
        log,
    }
}
