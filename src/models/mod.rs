pub mod ease;
pub mod item;
pub mod log_entry;
pub mod profile;
pub mod question_bank;
pub mod review_record;
pub mod session;
pub mod tip;

pub use item::Item;
pub use log_entry::{LogEntry, SessionLog};
pub use profile::{DailyPlan, Profile};
pub use question_bank::QuestionBank;
pub use review_record::{ReviewRecord, ReviewStore};
pub use session::{GradedAnswer, GradedItem, SessionSelection, SessionSummary};
pub use tip::{Tip, pick_tip};
