pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;

pub use config::Config;
pub use error::{CoachError, Result};
pub use models::{
    GradedAnswer, Item, LogEntry, Profile, QuestionBank, ReviewRecord, ReviewStore,
    SessionLog, SessionSelection, SessionSummary,
};
pub use scheduler::StudyCoach;
