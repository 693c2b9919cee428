pub mod coach;
pub mod grader;
pub mod selector;

pub use coach::StudyCoach;
pub use grader::{GradeOutcome, grade};
pub use selector::select;
