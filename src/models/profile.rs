//! Learner profile captured at onboarding, plus the daily plan derived from it.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "You";
/// Share of the daily minutes spent on reviews; the rest goes to new material.
const REVIEW_SHARE: f64 = 0.6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub exam: String,
    pub exam_date: NaiveDate,
    /// Minutes per day
    pub daily: u32,
    /// Reminder time as entered, e.g. "21:00"
    pub notify_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyPlan {
    pub total_minutes: u32,
    pub review_minutes: u32,
    pub new_minutes: u32,
}

impl Profile {
    /// Creates a profile; a blank name falls back to "You".
    pub fn new(
        name: &str,
        exam: impl Into<String>,
        exam_date: NaiveDate,
        daily: u32,
        notify_at: impl Into<String>,
    ) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name.to_string()
            },
            exam: exam.into(),
            exam_date,
            daily,
            notify_at: notify_at.into(),
        }
    }

    /// Whole days left until the exam, never less than 1.
    pub fn days_until_exam(&self, today: NaiveDate) -> i64 {
        (self.exam_date - today).num_days().max(1)
    }

    pub fn plan(&self) -> DailyPlan {
        let daily = f64::from(self.daily);
        DailyPlan {
            total_minutes: self.daily,
            review_minutes: (daily * REVIEW_SHARE).round() as u32,
            new_minutes: (daily * (1.0 - REVIEW_SHARE)).round() as u32,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hi, {}!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_blank_name_defaults() {
        let profile = Profile::new("   ", "TOEIC", day("2025-03-01"), 30, "21:00");
        assert_eq!(profile.name, "You");
        assert_eq!(profile.greeting(), "Hi, You!");
    }

    #[test]
    fn test_days_until_exam_floor() {
        let profile = Profile::new("Aki", "TOEIC", day("2025-03-01"), 30, "21:00");
        assert_eq!(profile.days_until_exam(day("2025-02-01")), 28);
        assert_eq!(profile.days_until_exam(day("2025-03-01")), 1);
        assert_eq!(profile.days_until_exam(day("2025-04-01")), 1);
    }

    #[test]
    fn test_plan_split() {
        let profile = Profile::new("Aki", "TOEIC", day("2025-03-01"), 25, "21:00");
        let plan = profile.plan();
        assert_eq!(plan.total_minutes, 25);
        assert_eq!(plan.review_minutes, 15);
        assert_eq!(plan.new_minutes, 10);
    }

    #[test]
    fn test_profile_json_keys() {
        let json = r#"{"name":"Aki","exam":"TOEIC","examDate":"2025-03-01","daily":30,"notifyAt":"21:00"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.exam_date, day("2025-03-01"));
        assert_eq!(profile.notify_at, "21:00");
    }
}
